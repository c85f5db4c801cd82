use crate::assets::AssetError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} named {name}")]
    NotFound { entity: &'static str, name: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AssetError> for CoreError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::NotFound(name) => CoreError::NotFound {
                entity: "Asset",
                name,
            },
            AssetError::NameConflict(_) | AssetError::Immutable { .. } => {
                CoreError::Conflict(err.to_string())
            }
            AssetError::InvalidName(_)
            | AssetError::InvalidType(_)
            | AssetError::InvalidClass { .. }
            | AssetError::UnknownDetail { .. }
            | AssetError::DetailTypeMismatch { .. } => CoreError::Validation(err.to_string()),
        }
    }
}
