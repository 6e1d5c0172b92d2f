use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use imovel_core::AppError;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Where plan definitions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanCatalogConfig {
    /// Compiled-in plan table.
    Static,
    /// Remote plans REST API.
    Remote {
        base_url: Url,
        cache_ttl: Duration,
        timeout: Duration,
    },
}

impl PlanCatalogConfig {
    pub fn source_name(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Remote { .. } => "remote",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub plan_catalog: PlanCatalogConfig,
    pub permission_matrix_path: Option<PathBuf>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let frontend_url =
            lookup("FRONTEND_URL").unwrap_or_else(|| "http://localhost:3000".to_owned());
        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = match non_empty(&lookup, "API_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            None => 3001,
        };

        let plan_catalog = match non_empty(&lookup, "PLAN_CATALOG_URL") {
            Some(value) => {
                let base_url = Url::parse(value.as_str()).map_err(|error| {
                    AppError::Validation(format!("invalid PLAN_CATALOG_URL: {error}"))
                })?;
                PlanCatalogConfig::Remote {
                    base_url,
                    cache_ttl: seconds(&lookup, "PLAN_CATALOG_CACHE_TTL_SECONDS", 60)?,
                    timeout: seconds(&lookup, "PLAN_CATALOG_TIMEOUT_SECONDS", 10)?,
                }
            }
            None => PlanCatalogConfig::Static,
        };

        let permission_matrix_path = non_empty(&lookup, "PERMISSION_MATRIX_PATH").map(PathBuf::from);

        Ok(Self {
            frontend_url,
            api_host,
            api_port,
            plan_catalog,
            permission_matrix_path,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}

fn seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
) -> Result<Duration, AppError> {
    match non_empty(lookup, name) {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        None => Ok(Duration::from_secs(default)),
    }
}
