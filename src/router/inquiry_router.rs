use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handler::inquiry_handler::{contact_handler, quote_handler};
use crate::service::inquiry_service::InquiryServiceImpl;

pub fn inquiry_router(service: Arc<InquiryServiceImpl>) -> Router {
    Router::new()
        .route("/api/contact", post(contact_handler))
        .route("/api/quote", post(quote_handler))
        .with_state(service)
}
