use axum::{routing::get, Router};
use std::sync::Arc;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::{EmailConfig, RecaptchaConfig, SupabaseConfig};
use crate::repository::catalog_repo::SupabaseCatalogRepository;
use crate::repository::inquiry_repo::SupabaseInquiryRepository;
use crate::router::catalog_router::catalog_router;
use crate::router::inquiry_router::inquiry_router;
use crate::service::catalog_service::CatalogServiceImpl;
use crate::service::inquiry_service::InquiryServiceImpl;
use crate::util::email::SmtpEmailService;
use crate::util::recaptcha::GoogleRecaptchaVerifier;

pub struct App {
    config: AppConfig,
    router: Router,
    pub inquiry_service: Arc<InquiryServiceImpl>,
    pub catalog_service: Arc<CatalogServiceImpl>,
}

impl App {
    /// Build the application. Every collaborator is constructed here and
    /// injected; a missing required environment variable aborts startup.
    pub fn new() -> Self {
        let config = AppConfig::from_env();

        let supabase_config = SupabaseConfig::from_env().expect("Supabase config error");
        let recaptcha_config = RecaptchaConfig::from_env().expect("reCAPTCHA config error");
        let email_config = EmailConfig::from_env().expect("Email config error");

        let verifier = Arc::new(
            GoogleRecaptchaVerifier::new(recaptcha_config).expect("reCAPTCHA verifier error"),
        );
        let inquiry_repo = Arc::new(
            SupabaseInquiryRepository::new(&supabase_config).expect("Inquiry repo error"),
        );
        let catalog_repo = Arc::new(
            SupabaseCatalogRepository::new(&supabase_config).expect("Catalog repo error"),
        );
        let notifier =
            Arc::new(SmtpEmailService::new(email_config).expect("Email service error"));

        let inquiry_service = Arc::new(InquiryServiceImpl::new(
            verifier,
            inquiry_repo,
            notifier,
        ));
        let catalog_service = Arc::new(CatalogServiceImpl::new(catalog_repo));

        let router = Self::create_router(inquiry_service.clone(), catalog_service.clone());

        App {
            config,
            router,
            inquiry_service,
            catalog_service,
        }
    }

    fn create_router(
        inquiry_service: Arc<InquiryServiceImpl>,
        catalog_service: Arc<CatalogServiceImpl>,
    ) -> Router {
        Router::new()
            .merge(inquiry_router(inquiry_service))
            .merge(catalog_router(catalog_service))
            .route("/health", get(|| async { "OK" }))
    }

    pub async fn start(self) {
        let addr = self.config.socket_addr().expect("Invalid bind address");
        info!("Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .await
            .expect("Failed to start server");
    }
}
