//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;
use userbase_core::{ErrorResponse, UserbaseError};
use userbase_service::StatusResponse;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub UserbaseError);

impl From<UserbaseError> for AppError {
    fn from(err: UserbaseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a 200 response with a JSON body.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper for the fixed success acknowledgement.
pub fn success() -> ApiResult<StatusResponse> {
    ok(StatusResponse::success())
}
