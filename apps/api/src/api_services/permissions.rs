use std::sync::Arc;

use imovel_core::AppError;
use imovel_domain::PermissionMatrix;
use imovel_infrastructure::load_permission_matrix;
use tracing::info;

use crate::api_config::ApiConfig;

pub(super) async fn build_permission_matrix(
    config: &ApiConfig,
) -> Result<Arc<PermissionMatrix>, AppError> {
    let matrix = match config.permission_matrix_path.as_deref() {
        Some(path) => load_permission_matrix(path).await?,
        None => {
            info!("using standard permission matrix");
            PermissionMatrix::standard()
        }
    };

    Ok(Arc::new(matrix))
}
