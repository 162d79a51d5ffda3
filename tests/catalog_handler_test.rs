use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt; // for .oneshot()

use async_trait::async_trait;
use primepillar_backend::model::catalog::{Equipment, Project, Service, TeamMember};
use primepillar_backend::repository::catalog_repo::CatalogRepository;
use primepillar_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use primepillar_backend::router::catalog_router::catalog_router;
use primepillar_backend::service::catalog_service::CatalogServiceImpl;

struct FakeCatalogRepo;

fn sample_project(slug: &str) -> Project {
    Project {
        id: "p1".to_string(),
        title: "Officers Residential Buildings".to_string(),
        slug: slug.to_string(),
        client: "Ghana Armed Forces".to_string(),
        industry: "government".to_string(),
        location: Some("Burma Camp, Accra".to_string()),
        year: Some(2025),
        status: "ongoing".to_string(),
        short_description: "6-Unit 4-Bedroom residential buildings.".to_string(),
        full_description: None,
        scope: None,
        featured: true,
        thumbnail_url: None,
        gallery: vec![],
        created_at: "2025-01-01T00:00:00Z".to_string(),
        updated_at: "2025-01-01T00:00:00Z".to_string(),
    }
}

#[async_trait]
impl CatalogRepository for FakeCatalogRepo {
    async fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        Ok(vec![Service {
            id: "s1".to_string(),
            title: "Road Construction".to_string(),
            slug: "road-construction".to_string(),
            icon: "road".to_string(),
            short_description: "Access roads and rehabilitation works.".to_string(),
            full_description: None,
            features: vec!["Grading".to_string()],
            image_url: None,
            display_order: 1,
            is_active: true,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }])
    }

    async fn list_projects(
        &self,
        industry: Option<&str>,
        _status: Option<&str>,
    ) -> RepositoryResult<Vec<Project>> {
        if industry == Some("energy") {
            return Ok(vec![]);
        }
        Ok(vec![sample_project("officers-residential-buildings")])
    }

    async fn get_project_by_slug(&self, slug: &str) -> RepositoryResult<Project> {
        if slug == "officers-residential-buildings" {
            Ok(sample_project(slug))
        } else {
            Err(RepositoryError::not_found(format!(
                "Project not found: {}",
                slug
            )))
        }
    }

    async fn list_equipment(&self) -> RepositoryResult<Vec<Equipment>> {
        Ok(vec![])
    }

    async fn list_team_members(&self) -> RepositoryResult<Vec<TeamMember>> {
        Ok(vec![])
    }
}

fn build_router() -> Router {
    let service = Arc::new(CatalogServiceImpl::new(Arc::new(FakeCatalogRepo)));
    catalog_router(service)
}

async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_list_services() {
    let (status, body) = get(build_router(), "/api/services").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["slug"], "road-construction");
}

#[tokio::test]
async fn test_list_projects_with_filter() {
    let (status, body) = get(build_router(), "/api/projects?industry=energy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    let (status, body) = get(build_router(), "/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["client"], "Ghana Armed Forces");
}

#[tokio::test]
async fn test_get_project_by_slug() {
    let (status, body) = get(
        build_router(),
        "/api/projects/officers-residential-buildings",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["industry"], "government");
}

#[tokio::test]
async fn test_get_missing_project_is_404() {
    let (status, body) = get(build_router(), "/api/projects/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_list_equipment_and_team_empty_ok() {
    let (status, body) = get(build_router(), "/api/equipment").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = get(build_router(), "/api/team").await;
    assert_eq!(status, StatusCode::OK);
}
