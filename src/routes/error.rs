//! HTTP error mapping
//!
//! Validation failures become 400 with a short plain-text message; storage failures
//! become 500. Details stay in the log.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::domain::DomainError;

#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError(DomainError::MalformedRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            DomainError::InvalidTarget(name) => {
                warn!(table = %name, "Rejected invalid table name");
                (StatusCode::BAD_REQUEST, "Invalid table name").into_response()
            }
            DomainError::MalformedRequest(reason) => {
                warn!(%reason, "Rejected malformed request");
                (StatusCode::BAD_REQUEST, format!("Invalid request: {}", reason)).into_response()
            }
            DomainError::Storage(reason) => {
                error!(%reason, "Storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
