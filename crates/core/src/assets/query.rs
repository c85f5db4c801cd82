//! Read filters and the fixed hierarchical lookups built on them.

use super::schema::{AssetClass, AssetType};

/// Which assets a listing returns. Listings are always sorted by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFilter {
    All,
    ByType(AssetType),
    ByClass(AssetClass),
}

impl AssetFilter {
    /// The column constraints this filter implies.
    ///
    /// A class filter also constrains the type the class belongs to, so the
    /// result stays correct if two types ever share a class name.
    pub fn constraints(self) -> (Option<AssetType>, Option<AssetClass>) {
        match self {
            AssetFilter::All => (None, None),
            AssetFilter::ByType(t) => (Some(t), None),
            AssetFilter::ByClass(c) => (Some(c.asset_type()), Some(c)),
        }
    }
}

impl AssetType {
    /// Short path segment used by the lookup routes.
    ///
    /// Shorter than the minimum asset name, so it can never shadow an asset.
    pub fn path_segment(self) -> &'static str {
        match self {
            AssetType::Satellite => "sat",
            AssetType::Antenna => "ant",
        }
    }
}

/// The filtered lookups, as `(relative path, filter)` pairs:
/// one per type (`/sat`) and one per class (`/sat/dove`).
pub fn filtered_lookups() -> Vec<(String, AssetFilter)> {
    let mut lookups = Vec::new();
    for asset_type in AssetType::ALL {
        let prefix = format!("/{}", asset_type.path_segment());
        for class in asset_type.classes() {
            lookups.push((format!("{prefix}/{class}"), AssetFilter::ByClass(*class)));
        }
        lookups.push((prefix, AssetFilter::ByType(asset_type)));
    }
    lookups
}
