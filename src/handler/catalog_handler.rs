use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::service::catalog_service::{CatalogService, CatalogServiceImpl};
use crate::util::error::{HandlerError, ServiceError};

pub async fn list_services_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let services = service
        .list_services()
        .await
        .map_err(|e| map_catalog_error(e, "Failed to fetch services"))?;
    Ok(Json(services))
}

pub async fn list_projects_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let industry = params.get("industry").map(|s| s.as_str());
    let status = params.get("status").map(|s| s.as_str());
    let projects = service
        .list_projects(industry, status)
        .await
        .map_err(|e| map_catalog_error(e, "Failed to fetch projects"))?;
    Ok(Json(projects))
}

pub async fn get_project_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let project = service
        .get_project(&slug)
        .await
        .map_err(|e| map_catalog_error(e, "Failed to fetch project"))?;
    Ok(Json(project))
}

pub async fn list_equipment_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let equipment = service
        .list_equipment()
        .await
        .map_err(|e| map_catalog_error(e, "Failed to fetch equipment"))?;
    Ok(Json(equipment))
}

pub async fn list_team_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let members = service
        .list_team_members()
        .await
        .map_err(|e| map_catalog_error(e, "Failed to fetch team members"))?;
    Ok(Json(members))
}

fn map_catalog_error(err: ServiceError, fallback: &str) -> HandlerError {
    match err {
        ServiceError::NotFound(msg) => HandlerError::not_found(msg),
        _ => HandlerError::internal(fallback),
    }
}
