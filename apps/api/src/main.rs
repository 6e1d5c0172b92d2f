//! Imovel access API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use imovel_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;
    let app_state = api_services::build_app_state(&config).await?;
    let app = api_router::build_router(app_state, &config.frontend_url)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind {address}: {error}")))?;

    info!(%address, "api listening");
    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("server error: {error}")))
}
