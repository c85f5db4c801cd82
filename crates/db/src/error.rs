use plassets_core::assets::AssetError;

/// Errors raised by the asset store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain error: validation, conflict or not-found.
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to encode asset details: {0}")]
    Encoding(#[from] serde_json::Error),

    /// A stored row that no longer passes validation.
    #[error("Stored asset {name} is invalid: {reason}")]
    Corrupt { name: String, reason: String },
}
