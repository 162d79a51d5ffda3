use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::config::RecaptchaConfig;

/// reCAPTCHA verification errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecaptchaError {
    /// Deployment defect: the server-side secret is missing. Not retryable.
    #[error("reCAPTCHA secret key not configured")]
    NotConfigured,

    /// The remote verifier looked at the token and said no
    #[error("reCAPTCHA verification failed")]
    Rejected,

    /// The verifier itself was unreachable or returned a malformed response.
    /// Distinct from Rejected so callers can surface a generic retry message.
    #[error("reCAPTCHA verifier unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait RecaptchaVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<(), RecaptchaError>;
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<String>,
}

/// Server-to-server client for Google's siteverify endpoint
#[derive(Debug)]
pub struct GoogleRecaptchaVerifier {
    config: RecaptchaConfig,
    client: reqwest::Client,
}

impl GoogleRecaptchaVerifier {
    pub fn new(config: RecaptchaConfig) -> Result<Self, RecaptchaError> {
        if config.secret_key.is_empty() {
            error!("reCAPTCHA secret key missing at verifier construction");
            return Err(RecaptchaError::NotConfigured);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| RecaptchaError::Unavailable(format!("Failed to build client: {}", e)))?;

        info!("reCAPTCHA verifier initialized");
        Ok(GoogleRecaptchaVerifier { config, client })
    }
}

#[async_trait]
impl RecaptchaVerifier for GoogleRecaptchaVerifier {
    #[instrument(skip(self, token))]
    async fn verify(&self, token: &str) -> Result<(), RecaptchaError> {
        if self.config.secret_key.is_empty() {
            return Err(RecaptchaError::NotConfigured);
        }

        debug!("Verifying reCAPTCHA token");
        let response = self
            .client
            .post(&self.config.verify_url)
            .form(&[
                ("secret", self.config.secret_key.as_str()),
                ("response", token),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("reCAPTCHA verification request failed: {}", e);
                RecaptchaError::Unavailable(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("reCAPTCHA verifier returned status {}", status);
            return Err(RecaptchaError::Unavailable(format!(
                "Verifier returned status {}",
                status
            )));
        }

        let result: SiteVerifyResponse = response.json().await.map_err(|e| {
            error!("Malformed siteverify response: {}", e);
            RecaptchaError::Unavailable(format!("Malformed response: {}", e))
        })?;

        if !result.success {
            warn!(
                "reCAPTCHA token rejected, error codes: {:?}",
                result.error_codes
            );
            return Err(RecaptchaError::Rejected);
        }

        debug!("reCAPTCHA token verified");
        Ok(())
    }
}
