pub mod app_conf;
pub mod email_conf;
pub mod recaptcha_conf;
pub mod supabase_conf;


pub use app_conf::AppConfig;
pub use email_conf::EmailConfig;
pub use recaptcha_conf::RecaptchaConfig;
pub use supabase_conf::SupabaseConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
