use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::model::catalog::{Equipment, Project, Service, TeamMember};
use crate::repository::catalog_repo::CatalogRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_services(&self) -> Result<Vec<Service>, ServiceError>;
    async fn list_projects(
        &self,
        industry: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<Project>, ServiceError>;
    async fn get_project(&self, slug: &str) -> Result<Project, ServiceError>;
    async fn list_equipment(&self) -> Result<Vec<Equipment>, ServiceError>;
    async fn list_team_members(&self) -> Result<Vec<TeamMember>, ServiceError>;
}

pub struct CatalogServiceImpl {
    pub catalog_repo: Arc<dyn CatalogRepository>,
}

impl CatalogServiceImpl {
    pub fn new(catalog_repo: Arc<dyn CatalogRepository>) -> Self {
        CatalogServiceImpl { catalog_repo }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    #[instrument(skip(self))]
    async fn list_services(&self) -> Result<Vec<Service>, ServiceError> {
        let res = self.catalog_repo.list_services().await;
        match &res {
            Ok(services) => info!("Fetched {} services", services.len()),
            Err(e) => error!("Failed to list services: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_projects(
        &self,
        industry: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<Project>, ServiceError> {
        let res = self.catalog_repo.list_projects(industry, status).await;
        match &res {
            Ok(projects) => info!("Fetched {} projects", projects.len()),
            Err(e) => error!("Failed to list projects: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(slug = %slug))]
    async fn get_project(&self, slug: &str) -> Result<Project, ServiceError> {
        let res = self.catalog_repo.get_project_by_slug(slug).await;
        match &res {
            Ok(_) => info!("Project fetched successfully"),
            Err(e) => error!("Failed to fetch project: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_equipment(&self) -> Result<Vec<Equipment>, ServiceError> {
        let res = self.catalog_repo.list_equipment().await;
        match &res {
            Ok(equipment) => info!("Fetched {} equipment items", equipment.len()),
            Err(e) => error!("Failed to list equipment: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self))]
    async fn list_team_members(&self) -> Result<Vec<TeamMember>, ServiceError> {
        let res = self.catalog_repo.list_team_members().await;
        match &res {
            Ok(members) => info!("Fetched {} team members", members.len()),
            Err(e) => error!("Failed to list team members: {e}"),
        }
        res.map_err(ServiceError::from)
    }
}
