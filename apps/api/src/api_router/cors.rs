//! Browser access policy.
//!
//! The `x-user-*` identity headers come from the gateway only and are not
//! accepted from browsers.

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use imovel_core::AppError;
use tower_http::cors::CorsLayer;

pub(super) fn build_cors_layer(frontend_url: &str) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/')).map_err(|error| {
        AppError::Validation(format!("FRONTEND_URL is not a valid origin: {error}"))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE]))
}
