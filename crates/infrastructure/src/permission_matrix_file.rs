use std::path::Path;

use imovel_core::{AppError, AppResult};
use imovel_domain::PermissionMatrix;
use tracing::info;

/// Loads a permission matrix override from a JSON file.
///
/// The document maps role tags to `resource:action` lists. Roles missing from
/// the file hold no permissions.
pub async fn load_permission_matrix(path: &Path) -> AppResult<PermissionMatrix> {
    let document = tokio::fs::read_to_string(path).await.map_err(|error| {
        AppError::Validation(format!(
            "failed to read permission matrix '{}': {error}",
            path.display()
        ))
    })?;

    let matrix = PermissionMatrix::from_json(document.as_str())?;
    info!(path = %path.display(), roles = matrix.entries().count(), "loaded permission matrix override");

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use imovel_domain::{Permission, Role};

    use super::load_permission_matrix;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("imovel-matrix-{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn loads_matrix_from_disk() {
        let path = scratch_path();
        let written = tokio::fs::write(&path, r#"{"BROKER": ["audit:read"]}"#).await;
        assert!(written.is_ok());

        let matrix = load_permission_matrix(&path).await;
        let _ = tokio::fs::remove_file(&path).await;

        assert!(matrix.is_ok_and(|matrix| {
            matrix.grants(&Role::Broker, Permission::AuditRead)
                && matrix.permissions_for(&Role::Ceo).is_empty()
        }));
    }

    #[tokio::test]
    async fn missing_file_is_a_validation_error() {
        let matrix = load_permission_matrix(&scratch_path()).await;
        assert!(matrix.is_err());
    }
}
