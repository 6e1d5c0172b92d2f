use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use imovel_application::PlanCatalog;
use imovel_core::AppResult;
use imovel_domain::PlanDefinition;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

impl<T: Clone> CacheEntry<T> {
    fn fresh_value(&self, now: Instant) -> Option<T> {
        (self.expires_at > now).then(|| self.value.clone())
    }
}

/// Time-bounded cache in front of another plan catalog.
///
/// Lookups that found no plan are cached too. A zero TTL disables caching.
pub struct CachingPlanCatalog {
    inner: Arc<dyn PlanCatalog>,
    ttl: Duration,
    plans: RwLock<HashMap<String, CacheEntry<Option<PlanDefinition>>>>,
    listing: RwLock<Option<CacheEntry<Vec<PlanDefinition>>>>,
}

impl CachingPlanCatalog {
    /// Wraps `inner` with a cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(inner: Arc<dyn PlanCatalog>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            plans: RwLock::new(HashMap::new()),
            listing: RwLock::new(None),
        }
    }

    /// Drops every cached entry.
    pub async fn invalidate(&self) {
        self.plans.write().await.clear();
        *self.listing.write().await = None;
    }

    fn expiry(&self) -> Instant {
        let now = Instant::now();
        now.checked_add(self.ttl).unwrap_or(now)
    }
}

#[async_trait]
impl PlanCatalog for CachingPlanCatalog {
    async fn list_plans(&self) -> AppResult<Vec<PlanDefinition>> {
        if self.ttl.is_zero() {
            return self.inner.list_plans().await;
        }

        if let Some(plans) = self
            .listing
            .read()
            .await
            .as_ref()
            .and_then(|entry| entry.fresh_value(Instant::now()))
        {
            return Ok(plans);
        }

        let plans = self.inner.list_plans().await?;
        debug!(count = plans.len(), "cached plan catalog listing");
        *self.listing.write().await = Some(CacheEntry {
            value: plans.clone(),
            expires_at: self.expiry(),
        });

        Ok(plans)
    }

    async fn find_plan(&self, plan_name: &str) -> AppResult<Option<PlanDefinition>> {
        if self.ttl.is_zero() {
            return self.inner.find_plan(plan_name).await;
        }

        let key = plan_name.trim().to_uppercase();
        {
            let plans = self.plans.read().await;
            if let Some(plan) = plans
                .get(&key)
                .and_then(|entry| entry.fresh_value(Instant::now()))
            {
                return Ok(plan);
            }
        }

        let plan = self.inner.find_plan(plan_name).await?;
        let mut plans = self.plans.write().await;
        let now = Instant::now();
        plans.retain(|_, entry| entry.expires_at > now);
        plans.insert(
            key,
            CacheEntry {
                value: plan.clone(),
                expires_at: self.expiry(),
            },
        );

        Ok(plan)
    }
}
