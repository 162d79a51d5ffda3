use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::dto::inquiry_dto::FieldError;
use crate::util::recaptcha::RecaptchaError;

#[derive(Debug, Serialize)]
pub enum HandlerErrorKind {
    NotFound,
    Validation,
    BadRequest,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

/// Error payload returned to HTTP clients. Serializes to
/// `{"success": false, "message": ..., "errors": [...]}` so the frontend can
/// show a banner plus per-field messages.
#[derive(Debug)]
pub struct HandlerError {
    pub kind: HandlerErrorKind,
    pub message: String,
    pub errors: Option<Vec<FieldError>>,
}

impl HandlerError {
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::BadRequest,
            message: message.into(),
            errors: None,
        }
    }

    pub fn validation<T: Into<String>>(message: T, errors: Vec<FieldError>) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Validation,
            message: message.into(),
            errors: Some(errors),
        }
    }

    pub fn not_found<T: Into<String>>(message: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::NotFound,
            message: message.into(),
            errors: None,
        }
    }

    pub fn internal<T: Into<String>>(message: T) -> Self {
        HandlerError {
            kind: HandlerErrorKind::Internal,
            message: message.into(),
            errors: None,
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for HandlerError {}

/// `axum::Json` wrapper whose rejection speaks the API's error payload.
/// A malformed or incomplete body would otherwise surface axum's plain-text
/// 422; clients of this API only ever see `{"success": false, ...}` JSON.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(HandlerError::bad_request(rejection.body_text())),
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.kind {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = match self.errors {
            Some(errors) => json!({
                "success": false,
                "message": self.message,
                "errors": errors,
            }),
            None => json!({
                "success": false,
                "message": self.message,
            }),
        };
        (status, axum::Json(body)).into_response()
    }
}

/// Pipeline-level error taxonomy. Each variant maps to exactly one user-facing
/// outcome in the handlers; nothing propagates past them unhandled.
#[derive(Debug, Clone)]
pub enum ServiceError {
    /// Token failed remote verification; user can retry the CAPTCHA
    CaptchaRejected,
    /// The remote verifier itself was unreachable or returned garbage
    CaptchaUnavailable(String),
    /// Required secret/credential missing; deployment defect
    Configuration(String),
    /// Insert failed; no email is sent after this
    Persistence(String),
    /// Email send failed after successful persistence
    Notification(String),
    NotFound(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::CaptchaRejected => write!(f, "reCAPTCHA verification rejected"),
            ServiceError::CaptchaUnavailable(msg) => {
                write!(f, "reCAPTCHA verifier unavailable: {}", msg)
            }
            ServiceError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            ServiceError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
            ServiceError::Notification(msg) => write!(f, "Notification error: {}", msg),
            ServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            other => ServiceError::Persistence(other.to_string()),
        }
    }
}

impl From<RecaptchaError> for ServiceError {
    fn from(err: RecaptchaError) -> Self {
        match err {
            RecaptchaError::NotConfigured => ServiceError::Configuration(err.to_string()),
            RecaptchaError::Rejected => ServiceError::CaptchaRejected,
            RecaptchaError::Unavailable(msg) => ServiceError::CaptchaUnavailable(msg),
        }
    }
}

impl From<crate::util::email::EmailError> for ServiceError {
    fn from(err: crate::util::email::EmailError) -> Self {
        ServiceError::Notification(err.to_string())
    }
}
