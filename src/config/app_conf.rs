use std::env;
use std::net::SocketAddr;
use tracing::warn;

use crate::config::ConfigError;

/// HTTP listener settings. Unlike the outbound-service configs, everything
/// here has a sane local default, so `from_env` never fails.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("APP_PORT value {:?} is not a port, using 8080", raw);
                8080
            }),
            Err(_) => 8080,
        };
        AppConfig { host, port }
    }

    /// Resolve the bind address. A host that is not an IP address is a
    /// deployment mistake and gets reported as such instead of at bind time.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("APP_HOST {:?} is not an IP address", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Create AppConfig for testing
    pub fn from_test_env() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_resolves() {
        let config = AppConfig::from_test_env();
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_socket_addr_rejects_non_ip_host() {
        let config = AppConfig {
            host: "not-an-ip".to_string(),
            port: 8080,
        };
        assert!(config.socket_addr().is_err());
    }
}
