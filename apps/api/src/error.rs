use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use imovel_core::AppError;
use serde::Serialize;
use tracing::error;
use ts_rs::TS;

/// Error body returned by every endpoint.
///
/// `code` is stable and meant for the front end to branch on; `message` is
/// for people.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    code: &'static str,
    message: String,
}

/// Converts [`AppError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthenticated"),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Upstream details stay in the logs.
        let message = match &self.0 {
            AppError::Internal(detail) => {
                error!(%detail, "request failed");
                "internal server error".to_owned()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { code, message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
