//! Asset data model and validation engine.
//!
//! This module owns everything that decides whether an asset is valid: the
//! name rule, the type/class taxonomy, the per-class detail registry and the
//! write-once entity built from them. It does NOT depend on the database
//! crate; persistence is reached through the [`NameRegistry`] seam.

pub mod details;
pub mod entity;
pub mod query;
pub mod schema;

pub use details::{describe_field, permitted_fields, DetailKind, DetailValue, Details};
pub use entity::{Asset, AssetProjection, NameRegistry, NewAsset};
pub use query::{filtered_lookups, AssetFilter};
pub use schema::{validate_class, validate_name, validate_type, AssetClass, AssetType};

/// Asset-domain error type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssetError {
    #[error(
        "Invalid asset name '{0}': expected 4-64 ASCII letters, digits, '_' or '-', \
         not starting with '_' or '-'"
    )]
    InvalidName(String),

    #[error("Invalid asset type '{0}': expected one of satellite, antenna")]
    InvalidType(String),

    #[error("Invalid asset class '{class}' for type {asset_type}")]
    InvalidClass { asset_type: AssetType, class: String },

    #[error(
        "Unknown detail '{field}' for {asset_type}/{asset_class} (permitted: {})",
        details::permitted_summary(.asset_type, .asset_class)
    )]
    UnknownDetail {
        field: String,
        asset_type: AssetType,
        asset_class: AssetClass,
    },

    #[error("Detail '{field}' must be {expected}, got {found}")]
    DetailTypeMismatch {
        field: String,
        expected: DetailKind,
        found: &'static str,
    },

    #[error("Asset name already in use: {0}")]
    NameConflict(String),

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset {field} is immutable once assigned")]
    Immutable { field: &'static str },
}
