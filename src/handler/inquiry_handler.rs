use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

use crate::dto::inquiry_dto::{field_errors, ContactRequest, QuoteRequest, SubmissionResponse};
use crate::service::inquiry_service::{InquiryService, InquiryServiceImpl};
use crate::util::error::{HandlerError, JsonBody, ServiceError};

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Message sent successfully! We'll get back to you soon.";
pub const QUOTE_SUCCESS_MESSAGE: &str =
    "Quote request submitted successfully! We'll get back to you within 24-48 hours.";
pub const CAPTCHA_FAILED_MESSAGE: &str = "reCAPTCHA verification failed. Please try again.";

pub async fn contact_handler(
    State(service): State<Arc<InquiryServiceImpl>>,
    JsonBody(payload): JsonBody<ContactRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[contact_handler] Handler called");

    if let Err(e) = payload.validate() {
        let errors = field_errors(&e);
        warn!("[contact_handler] Validation failed: {} violations", errors.len());
        return Err(HandlerError::validation(
            "Failed to send message. Please check the highlighted fields.",
            errors,
        ));
    }

    service
        .submit_contact(payload)
        .await
        .map_err(map_contact_error)?;

    Ok(Json(SubmissionResponse {
        success: true,
        message: CONTACT_SUCCESS_MESSAGE.to_string(),
    }))
}

pub async fn quote_handler(
    State(service): State<Arc<InquiryServiceImpl>>,
    JsonBody(payload): JsonBody<QuoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[quote_handler] Handler called");

    if let Err(e) = payload.validate() {
        let errors = field_errors(&e);
        warn!("[quote_handler] Validation failed: {} violations", errors.len());
        return Err(HandlerError::validation(
            "Failed to submit quote request. Please check the highlighted fields.",
            errors,
        ));
    }

    service.submit_quote(payload).await.map_err(map_quote_error)?;

    Ok(Json(SubmissionResponse {
        success: true,
        message: QUOTE_SUCCESS_MESSAGE.to_string(),
    }))
}

fn map_contact_error(err: ServiceError) -> HandlerError {
    match err {
        ServiceError::CaptchaRejected => HandlerError::bad_request(CAPTCHA_FAILED_MESSAGE),
        ServiceError::CaptchaUnavailable(_) | ServiceError::Persistence(_) => {
            HandlerError::bad_request("Failed to send message. Please try again.")
        }
        ServiceError::Configuration(msg) => {
            HandlerError::internal(format!("Server configuration error: {}", msg))
        }
        // The inquiry is stored at this point, but this flow still reports the
        // send failure with the provider error text. See DESIGN.md.
        ServiceError::Notification(msg) => {
            HandlerError::internal(format!("Failed to send notification email: {}", msg))
        }
        other => HandlerError::internal(other.to_string()),
    }
}

fn map_quote_error(err: ServiceError) -> HandlerError {
    match err {
        ServiceError::CaptchaRejected => HandlerError::bad_request(CAPTCHA_FAILED_MESSAGE),
        ServiceError::CaptchaUnavailable(_) | ServiceError::Persistence(_) => {
            HandlerError::bad_request("Failed to submit quote request. Please try again.")
        }
        ServiceError::Configuration(msg) => {
            HandlerError::internal(format!("Server configuration error: {}", msg))
        }
        other => HandlerError::internal(other.to_string()),
    }
}
