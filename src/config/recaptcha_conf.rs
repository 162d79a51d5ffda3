use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

pub const GOOGLE_SITEVERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// reCAPTCHA v2/v3 server-side verification settings
#[derive(Debug, Clone)]
pub struct RecaptchaConfig {
    /// Server-held secret key, never sent to clients
    pub secret_key: String,
    /// Public site key, exposed to the frontend widget
    pub site_key: String,
    /// Verification endpoint. Overridable so tests can point at a stub server.
    pub verify_url: String,
    /// Request timeout in seconds for the verification call
    pub request_timeout_secs: u64,
}

impl RecaptchaConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading reCAPTCHA configuration from environment variables");

        let secret_key = env::var("RECAPTCHA_SECRET_KEY").map_err(|_| {
            error!("RECAPTCHA_SECRET_KEY environment variable not found");
            ConfigError::EnvVarNotFound("RECAPTCHA_SECRET_KEY".to_string())
        })?;
        debug!("reCAPTCHA secret key: [REDACTED]");

        let site_key = env::var("RECAPTCHA_SITE_KEY").map_err(|_| {
            error!("RECAPTCHA_SITE_KEY environment variable not found");
            ConfigError::EnvVarNotFound("RECAPTCHA_SITE_KEY".to_string())
        })?;
        debug!("reCAPTCHA site key: {}", site_key);

        let verify_url = env::var("RECAPTCHA_VERIFY_URL").unwrap_or_else(|_| {
            debug!("RECAPTCHA_VERIFY_URL not set, using Google siteverify endpoint");
            GOOGLE_SITEVERIFY_URL.to_string()
        });

        let request_timeout_secs = env::var("RECAPTCHA_REQUEST_TIMEOUT")
            .unwrap_or_else(|_| {
                warn!("RECAPTCHA_REQUEST_TIMEOUT not set, defaulting to 10 seconds");
                "10".to_string()
            })
            .parse::<u64>()
            .unwrap_or(10);

        let config = RecaptchaConfig {
            secret_key,
            site_key,
            verify_url,
            request_timeout_secs,
        };

        config.validate()?;
        info!("reCAPTCHA configuration loaded successfully");
        Ok(config)
    }

    /// Create RecaptchaConfig for testing against a local stub server
    pub fn from_test_env() -> Self {
        RecaptchaConfig {
            secret_key: "test-secret-key".to_string(),
            site_key: "test-site-key".to_string(),
            verify_url: "http://localhost:9999/siteverify".to_string(),
            request_timeout_secs: 5,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.is_empty() {
            error!("reCAPTCHA secret key is empty");
            return Err(ConfigError::ValidationError(
                "reCAPTCHA secret key cannot be empty".to_string(),
            ));
        }

        if self.site_key.is_empty() {
            error!("reCAPTCHA site key is empty");
            return Err(ConfigError::ValidationError(
                "reCAPTCHA site key cannot be empty".to_string(),
            ));
        }

        if self.verify_url.is_empty() {
            error!("reCAPTCHA verify URL is empty");
            return Err(ConfigError::ValidationError(
                "reCAPTCHA verify URL cannot be empty".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            error!("reCAPTCHA request timeout is 0");
            return Err(ConfigError::ValidationError(
                "reCAPTCHA request timeout cannot be 0".to_string(),
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
        let config = RecaptchaConfig::from_test_env();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_secret() {
        let mut config = RecaptchaConfig::from_test_env();
        config.secret_key = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_site_key() {
        let mut config = RecaptchaConfig::from_test_env();
        config.site_key = "".to_string();
        assert!(config.validate().is_err());
    }
}
