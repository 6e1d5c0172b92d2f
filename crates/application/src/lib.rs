//! Application services and ports.

#![forbid(unsafe_code)]

mod authorization_service;
mod plan_catalog_ports;
mod plan_lifecycle_service;

pub use authorization_service::AuthorizationService;
pub use plan_catalog_ports::PlanCatalog;
pub use plan_lifecycle_service::{PlanChangeRequest, PlanLifecycleService};
