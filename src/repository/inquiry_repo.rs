use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::SupabaseConfig;
use crate::model::inquiry::NewInquiry;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

/// The single operation the intake pipeline needs from the store. It never
/// reads inquiries back, so there is no query surface here.
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn insert(&self, inquiry: &NewInquiry) -> RepositoryResult<()>;
}

/// PostgREST-backed implementation writing to the hosted `inquiries` relation.
pub struct SupabaseInquiryRepository {
    client: reqwest::Client,
    rest_url: String,
}

impl SupabaseInquiryRepository {
    pub fn new(config: &SupabaseConfig) -> RepositoryResult<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.service_role_key).map_err(|_| {
            RepositoryError::ConnectionError("Invalid service role key".to_string())
        })?;
        headers.insert("apikey", key);
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.service_role_key))
            .map_err(|_| {
                RepositoryError::ConnectionError("Invalid service role key".to_string())
            })?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(RepositoryError::from)?;

        Ok(SupabaseInquiryRepository {
            client,
            rest_url: config.rest_url(),
        })
    }
}

#[async_trait]
impl InquiryRepository for SupabaseInquiryRepository {
    #[instrument(skip(self, inquiry), fields(inquiry_type = %inquiry.inquiry_type))]
    async fn insert(&self, inquiry: &NewInquiry) -> RepositoryResult<()> {
        debug!("Inserting inquiry row");

        let response = self
            .client
            .post(format!("{}/inquiries", self.rest_url))
            .header("Prefer", "return=minimal")
            .json(inquiry)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Inquiry row inserted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!("Inquiry insert failed with status {}: {}", status, body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(
                RepositoryError::connection(format!("Store rejected credentials: {}", body)),
            ),
            StatusCode::CONFLICT => Err(RepositoryError::AlreadyExists(body)),
            s if s.is_client_error() => Err(RepositoryError::ValidationError(body)),
            _ => Err(RepositoryError::database(format!(
                "Insert failed with status {}: {}",
                status, body
            ))),
        }
    }
}
