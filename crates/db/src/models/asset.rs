//! Asset row model.

use plassets_core::assets::{Asset, NewAsset};
use serde_json::{Map, Value};
use sqlx::FromRow;

use crate::error::StoreError;

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow)]
pub struct AssetRow {
    pub name: String,
    pub asset_type: String,
    pub asset_class: String,
    /// JSON object of detail fields.
    pub details: String,
}

impl AssetRow {
    /// Rebuild a detached [`Asset`] snapshot, re-running validation.
    pub fn into_asset(self) -> Result<Asset, StoreError> {
        let details: Map<String, Value> =
            serde_json::from_str(&self.details).map_err(|e| StoreError::Corrupt {
                name: self.name.clone(),
                reason: e.to_string(),
            })?;

        let input = NewAsset {
            name: Value::String(self.name.clone()),
            asset_type: Value::String(self.asset_type),
            asset_class: Value::String(self.asset_class),
            details: Some(details),
        };

        Asset::validate(&input).map_err(|e| StoreError::Corrupt {
            name: self.name,
            reason: e.to_string(),
        })
    }
}
