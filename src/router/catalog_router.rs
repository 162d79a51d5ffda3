use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::catalog_handler::{
    get_project_handler, list_equipment_handler, list_projects_handler, list_services_handler,
    list_team_handler,
};
use crate::service::catalog_service::CatalogServiceImpl;

pub fn catalog_router(service: Arc<CatalogServiceImpl>) -> Router {
    Router::new()
        .route("/api/services", get(list_services_handler))
        .route("/api/projects", get(list_projects_handler))
        .route("/api/projects/{slug}", get(get_project_handler))
        .route("/api/equipment", get(list_equipment_handler))
        .route("/api/team", get(list_team_handler))
        .with_state(service)
}
