use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::config::SupabaseConfig;
use crate::model::catalog::{Equipment, Project, Service, TeamMember};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

/// Read-only access to the catalog tables the website renders.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_services(&self) -> RepositoryResult<Vec<Service>>;
    async fn list_projects(
        &self,
        industry: Option<&str>,
        status: Option<&str>,
    ) -> RepositoryResult<Vec<Project>>;
    async fn get_project_by_slug(&self, slug: &str) -> RepositoryResult<Project>;
    async fn list_equipment(&self) -> RepositoryResult<Vec<Equipment>>;
    async fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>>;
}

pub struct SupabaseCatalogRepository {
    client: reqwest::Client,
    rest_url: String,
}

impl SupabaseCatalogRepository {
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

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(RepositoryError::from)?;

        Ok(SupabaseCatalogRepository {
            client,
            rest_url: config.rest_url(),
        })
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> RepositoryResult<Vec<T>> {
        debug!("Fetching rows from {}", table);
        let response = self
            .client
            .get(format!("{}/{}", self.rest_url, table))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Fetch from {} failed with status {}: {}", table, status, body);
            return Err(RepositoryError::database(format!(
                "Fetch from {} failed with status {}: {}",
                table, status, body
            )));
        }

        let rows = response.json::<Vec<T>>().await?;
        Ok(rows)
    }
}

#[async_trait]
impl CatalogRepository for SupabaseCatalogRepository {
    #[instrument(skip(self))]
    async fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        self.fetch_rows(
            "services",
            &[
                ("select", "*".to_string()),
                ("is_active", "eq.true".to_string()),
                ("order", "display_order.asc".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_projects(
        &self,
        industry: Option<&str>,
        status: Option<&str>,
    ) -> RepositoryResult<Vec<Project>> {
        let mut query = vec![
            ("select", "*".to_string()),
            ("order", "featured.desc,year.desc.nullslast".to_string()),
        ];
        if let Some(industry) = industry {
            query.push(("industry", format!("eq.{}", industry)));
        }
        if let Some(status) = status {
            query.push(("status", format!("eq.{}", status)));
        }
        self.fetch_rows("projects", &query).await
    }

    #[instrument(skip(self), fields(slug = %slug))]
    async fn get_project_by_slug(&self, slug: &str) -> RepositoryResult<Project> {
        let rows: Vec<Project> = self
            .fetch_rows(
                "projects",
                &[
                    ("select", "*".to_string()),
                    ("slug", format!("eq.{}", slug)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| RepositoryError::not_found(format!("Project not found: {}", slug)))
    }

    #[instrument(skip(self))]
    async fn list_equipment(&self) -> RepositoryResult<Vec<Equipment>> {
        self.fetch_rows(
            "equipment",
            &[
                ("select", "*".to_string()),
                ("is_available", "eq.true".to_string()),
                ("order", "category.asc.nullslast,name.asc".to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>> {
        self.fetch_rows(
            "team_members",
            &[
                ("select", "*".to_string()),
                ("order", "display_order.asc".to_string()),
            ],
        )
        .await
    }
}
