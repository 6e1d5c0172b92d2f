//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod caching_plan_catalog;
mod http_plan_catalog;
mod permission_matrix_file;
mod static_plan_catalog;

pub use caching_plan_catalog::CachingPlanCatalog;
pub use http_plan_catalog::HttpPlanCatalog;
pub use permission_matrix_file::load_permission_matrix;
pub use static_plan_catalog::StaticPlanCatalog;
