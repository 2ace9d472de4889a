use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use service::auth::AuthError;
use service::errors::ServiceError;

pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";
pub const FORBIDDEN_MESSAGE: &str = "forbidden access";

/// JSON error body: `{"message": ..., "detail": ...}`.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, message: message.into(), detail }
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE, None)
    }

    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, FORBIDDEN_MESSAGE, None)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not found", Some(detail.into()))
    }

    fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error", None)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            // Reason stays in the debug log written by the guard.
            AuthError::Unauthenticated(_) => Self::unauthorized(),
            AuthError::Forbidden => Self::forbidden(),
            AuthError::InvalidClaim(msg) => Self::new(StatusCode::BAD_REQUEST, "invalid claim", Some(msg)),
            AuthError::MissingSecret | AuthError::TokenError(_) => {
                error!(code = e.code(), error = %e, "token_failure");
                Self::internal()
            }
        }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Auth(auth) => auth.into(),
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, "validation error", Some(msg)),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Db(msg) => {
                error!(error = %msg, "storage_failure");
                Self::internal()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("signing secret unavailable: {0}")]
    Secret(#[from] AuthError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
