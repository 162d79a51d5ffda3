use std::env;
use tracing::{debug, error, info, warn};

use crate::config::ConfigError;

/// Connection settings for the hosted Supabase project. The backend only ever
/// talks to the PostgREST endpoint under `{url}/rest/v1`.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. https://xyzcompany.supabase.co
    pub url: String,
    /// Service-role key used for server-side inserts and reads
    pub service_role_key: String,
    /// Request timeout in seconds for PostgREST calls
    pub request_timeout_secs: u64,
}

impl SupabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading Supabase configuration from environment variables");

        let url = env::var("SUPABASE_URL").map_err(|_| {
            error!("SUPABASE_URL environment variable not found");
            ConfigError::EnvVarNotFound("SUPABASE_URL".to_string())
        })?;
        debug!("Supabase URL: {}", url);

        let service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY").map_err(|_| {
            error!("SUPABASE_SERVICE_ROLE_KEY environment variable not found");
            ConfigError::EnvVarNotFound("SUPABASE_SERVICE_ROLE_KEY".to_string())
        })?;
        debug!("Supabase service role key: [REDACTED]");

        let request_timeout_secs = env::var("SUPABASE_REQUEST_TIMEOUT")
            .unwrap_or_else(|_| {
                warn!("SUPABASE_REQUEST_TIMEOUT not set, defaulting to 10 seconds");
                "10".to_string()
            })
            .parse::<u64>()
            .unwrap_or(10);
        debug!("Supabase request timeout: {} seconds", request_timeout_secs);

        let config = SupabaseConfig {
            url,
            service_role_key,
            request_timeout_secs,
        };

        config.validate()?;
        info!("Supabase configuration loaded successfully");
        Ok(config)
    }

    /// Create SupabaseConfig for testing against a local stub server
    pub fn from_test_env() -> Self {
        SupabaseConfig {
            url: "http://localhost:54321".to_string(),
            service_role_key: "test-service-role-key".to_string(),
            request_timeout_secs: 5,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            error!("Supabase URL is empty");
            return Err(ConfigError::ValidationError(
                "Supabase URL cannot be empty".to_string(),
            ));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            error!("Supabase URL has no scheme");
            return Err(ConfigError::ValidationError(
                "Supabase URL must start with http:// or https://".to_string(),
            ));
        }

        if self.service_role_key.is_empty() {
            error!("Supabase service role key is empty");
            return Err(ConfigError::ValidationError(
                "Supabase service role key cannot be empty".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            error!("Supabase request timeout is 0");
            return Err(ConfigError::ValidationError(
                "Supabase request timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL of the PostgREST endpoint
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}
