use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Email configuration for SMTP settings and the company identity used in
/// outgoing templates.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP username for authentication
    pub smtp_username: String,
    /// SMTP password for authentication
    pub smtp_password: String,
    /// Whether to use TLS encryption
    pub use_tls: bool,
    /// Whether to use STARTTLS
    pub use_starttls: bool,
    /// From email address
    pub from_email: String,
    /// From name (display name)
    pub from_name: String,
    /// Inbox that receives internal inquiry notifications
    pub notification_email: String,
    /// Company phone number shown in confirmation emails
    pub company_phone: String,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl EmailConfig {
    /// Create EmailConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading email configuration from environment variables");

        let smtp_host = env::var("SMTP_HOST").map_err(|_| {
            error!("SMTP_HOST environment variable not found");
            ConfigError::EnvVarNotFound("SMTP_HOST".to_string())
        })?;
        debug!("SMTP host: {}", smtp_host);

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| {
                warn!("SMTP_PORT not set, defaulting to 465");
                "465".to_string()
            })
            .parse::<u16>()
            .map_err(|_| {
                error!("Invalid SMTP_PORT value");
                ConfigError::InvalidValue("Invalid SMTP_PORT value".to_string())
            })?;
        debug!("SMTP port: {}", smtp_port);

        let smtp_username = env::var("SMTP_USERNAME").map_err(|_| {
            error!("SMTP_USERNAME environment variable not found");
            ConfigError::EnvVarNotFound("SMTP_USERNAME".to_string())
        })?;
        debug!("SMTP username: {}", smtp_username);

        let smtp_password = env::var("SMTP_PASSWORD").map_err(|_| {
            error!("SMTP_PASSWORD environment variable not found");
            ConfigError::EnvVarNotFound("SMTP_PASSWORD".to_string())
        })?;
        debug!("SMTP password: [REDACTED]");

        let use_tls = env::var("SMTP_USE_TLS")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);
        debug!("SMTP use TLS: {}", use_tls);

        let use_starttls = env::var("SMTP_USE_STARTTLS")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);
        debug!("SMTP use STARTTLS: {}", use_starttls);

        let from_email = env::var("SMTP_FROM_EMAIL").map_err(|_| {
            error!("SMTP_FROM_EMAIL environment variable not found");
            ConfigError::EnvVarNotFound("SMTP_FROM_EMAIL".to_string())
        })?;
        debug!("From email: {}", from_email);

        let from_name = env::var("SMTP_FROM_NAME").unwrap_or_else(|_| {
            warn!("SMTP_FROM_NAME not set, using default");
            "PrimePillar Constructions".to_string()
        });
        debug!("From name: {}", from_name);

        let notification_email = env::var("NOTIFICATION_EMAIL").map_err(|_| {
            error!("NOTIFICATION_EMAIL environment variable not found");
            ConfigError::EnvVarNotFound("NOTIFICATION_EMAIL".to_string())
        })?;
        debug!("Notification email: {}", notification_email);

        let company_phone = env::var("COMPANY_PHONE").unwrap_or_else(|_| {
            warn!("COMPANY_PHONE not set, using default");
            "+233 246 937 073".to_string()
        });

        let connection_timeout_secs = env::var("SMTP_CONNECTION_TIMEOUT")
            .unwrap_or_else(|_| {
                warn!("SMTP_CONNECTION_TIMEOUT not set, defaulting to 30 seconds");
                "30".to_string()
            })
            .parse::<u64>()
            .unwrap_or(30);
        debug!("Connection timeout: {} seconds", connection_timeout_secs);

        let config = EmailConfig {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            use_tls,
            use_starttls,
            from_email,
            from_name,
            notification_email,
            company_phone,
            connection_timeout_secs,
        };

        config.validate()?;
        info!("Email configuration loaded successfully");
        Ok(config)
    }

    /// Create EmailConfig for testing
    pub fn from_test_env() -> Self {
        EmailConfig {
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: "test".to_string(),
            smtp_password: "test".to_string(),
            use_tls: false,
            use_starttls: false,
            from_email: "noreply@example.com".to_string(),
            from_name: "Test Constructions".to_string(),
            notification_email: "office@example.com".to_string(),
            company_phone: "+233 000 000 000".to_string(),
            connection_timeout_secs: 10,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smtp_host.is_empty() {
            error!("SMTP host is empty");
            return Err(ConfigError::ValidationError(
                "SMTP host cannot be empty".to_string(),
            ));
        }

        if self.smtp_port == 0 {
            error!("SMTP port is 0");
            return Err(ConfigError::ValidationError(
                "SMTP port cannot be 0".to_string(),
            ));
        }

        if self.smtp_username.is_empty() {
            error!("SMTP username is empty");
            return Err(ConfigError::ValidationError(
                "SMTP username cannot be empty".to_string(),
            ));
        }

        if self.smtp_password.is_empty() {
            error!("SMTP password is empty");
            return Err(ConfigError::ValidationError(
                "SMTP password cannot be empty".to_string(),
            ));
        }

        if self.from_email.is_empty() || !self.from_email.contains('@') {
            error!("Invalid from email");
            return Err(ConfigError::ValidationError(
                "Invalid from email".to_string(),
            ));
        }

        if self.notification_email.is_empty() || !self.notification_email.contains('@') {
            error!("Invalid notification email");
            return Err(ConfigError::ValidationError(
                "Invalid notification email".to_string(),
            ));
        }

        if self.connection_timeout_secs == 0 {
            error!("Connection timeout is 0");
            return Err(ConfigError::ValidationError(
                "Connection timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_config_is_valid() {
        let config = EmailConfig::from_test_env();
        assert!(config.validate().is_ok());
        assert!(!config.use_tls);
        assert!(!config.use_starttls);
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = EmailConfig::from_test_env();
        config.smtp_host = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_port() {
        let mut config = EmailConfig::from_test_env();
        config.smtp_port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_from_email() {
        let mut config = EmailConfig::from_test_env();
        config.from_email = "not-an-address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_notification_email() {
        let mut config = EmailConfig::from_test_env();
        config.notification_email = "".to_string();
        assert!(config.validate().is_err());
    }
}
