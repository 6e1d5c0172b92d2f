use serde::Serialize;
use ts_rs::TS;

/// Liveness payload with the active plan catalog source.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    pub plan_catalog: &'static str,
}
