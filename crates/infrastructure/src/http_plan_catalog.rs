use async_trait::async_trait;
use imovel_application::PlanCatalog;
use imovel_core::{AppError, AppResult};
use imovel_domain::{FreeAllowances, PlanDefinition, PlanLimit, PlanLimits};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

/// Plan catalog reading definitions from the remote plans REST API.
///
/// Expects `GET {base}/plans` and `GET {base}/plans/{name}` returning the
/// camel-cased plan documents of the remote API.
#[derive(Debug, Clone)]
pub struct HttpPlanCatalog {
    http_client: reqwest::Client,
    base_url: Url,
}

impl HttpPlanCatalog {
    /// Creates a catalog client rooted at `base_url`.
    pub fn new(http_client: reqwest::Client, base_url: Url) -> AppResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "plan catalog url '{base_url}' cannot be used as a base url"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn plans_url(&self, plan_name: Option<&str>) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                AppError::Internal(format!(
                    "plan catalog url '{}' cannot be a base",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty().push("plans");
            if let Some(plan_name) = plan_name {
                segments.push(plan_name);
            }
        }

        Ok(url)
    }

    async fn get(&self, url: Url) -> AppResult<reqwest::Response> {
        debug!(%url, "fetching plan catalog");
        self.http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|error| {
                AppError::Internal(format!("plan catalog request to '{url}' failed: {error}"))
            })
    }
}

#[async_trait]
impl PlanCatalog for HttpPlanCatalog {
    async fn list_plans(&self) -> AppResult<Vec<PlanDefinition>> {
        let url = self.plans_url(None)?;
        let response = self.get(url.clone()).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "plan catalog listing failed");
            return Err(AppError::Internal(format!(
                "plan catalog listing returned status {status}"
            )));
        }

        let documents = response
            .json::<Vec<RemotePlanDocument>>()
            .await
            .map_err(|error| {
                AppError::Internal(format!("plan catalog listing is malformed: {error}"))
            })?;

        documents
            .into_iter()
            .map(RemotePlanDocument::into_definition)
            .collect()
    }

    async fn find_plan(&self, plan_name: &str) -> AppResult<Option<PlanDefinition>> {
        let url = self.plans_url(Some(plan_name))?;
        let response = self.get(url.clone()).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            warn!(%url, %status, "plan catalog lookup failed");
            return Err(AppError::Internal(format!(
                "plan catalog lookup for '{plan_name}' returned status {status}"
            )));
        }

        let document = response.json::<RemotePlanDocument>().await.map_err(|error| {
            AppError::Internal(format!(
                "plan catalog document for '{plan_name}' is malformed: {error}"
            ))
        })?;

        document.into_definition().map(Some)
    }
}

/// Plan document as served by the remote API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemotePlanDocument {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    property_limit: Option<i64>,
    tenant_limit: Option<i64>,
    owner_limit: Option<i64>,
    broker_limit: Option<i64>,
    manager_limit: Option<i64>,
    free_inspections: Option<i64>,
    free_searches: Option<i64>,
    free_settlements: Option<i64>,
    free_api_calls: Option<i64>,
}

impl RemotePlanDocument {
    /// Upstream documents that fail validation are an `Internal` error, not
    /// the caller's.
    fn into_definition(self) -> AppResult<PlanDefinition> {
        let display_name = self.display_name.unwrap_or_default();
        let name = self.name;

        PlanDefinition::new(
            name.clone(),
            display_name,
            price_to_cents(self.price),
            PlanLimits {
                properties: self.property_limit.map(PlanLimit::from),
                tenants: self.tenant_limit.map(PlanLimit::from),
                owners: self.owner_limit.map(PlanLimit::from),
                brokers: self.broker_limit.map(PlanLimit::from),
                managers: self.manager_limit.map(PlanLimit::from),
            },
            FreeAllowances {
                inspections: self.free_inspections.map(PlanLimit::from),
                searches: self.free_searches.map(PlanLimit::from),
                settlements: self.free_settlements.map(PlanLimit::from),
                api_calls: self.free_api_calls.map(PlanLimit::from),
            },
        )
        .map_err(|error| {
            warn!(plan = %name, %error, "plan catalog served an invalid plan document");
            AppError::Internal(format!(
                "plan catalog document '{name}' is invalid: {error}"
            ))
        })
    }
}

fn price_to_cents(price: Option<f64>) -> u64 {
    match price {
        Some(price) if price.is_finite() && price > 0.0 => (price * 100.0).round() as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests;
