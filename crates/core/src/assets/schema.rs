//! Name rule and the type/class taxonomy.
//!
//! Pure functions, no I/O. Every check reports failure as an [`AssetError`];
//! nothing is coerced.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::AssetError;

/// Minimum asset name length, inclusive.
pub const NAME_MIN_LEN: usize = 4;

/// Maximum asset name length, inclusive.
pub const NAME_MAX_LEN: usize = 64;

/// First character alphanumeric, then 3-63 of alphanumeric, `_` or `-`.
const NAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9_-]{3,63}$";

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(NAME_PATTERN).expect("valid regex"));

/// Top-level asset category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Satellite,
    Antenna,
}

impl AssetType {
    pub const ALL: [AssetType; 2] = [AssetType::Satellite, AssetType::Antenna];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Satellite => "satellite",
            AssetType::Antenna => "antenna",
        }
    }

    /// The classes that may be assigned to an asset of this type.
    pub fn classes(self) -> &'static [AssetClass] {
        match self {
            AssetType::Satellite => &[AssetClass::Dove, AssetClass::Rapideye],
            AssetType::Antenna => &[AssetClass::Dish, AssetClass::Yagi],
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subcategory within an [`AssetType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Dove,
    Rapideye,
    Dish,
    Yagi,
}

impl AssetClass {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetClass::Dove => "dove",
            AssetClass::Rapideye => "rapideye",
            AssetClass::Dish => "dish",
            AssetClass::Yagi => "yagi",
        }
    }

    /// The type this class belongs to.
    ///
    /// Class names are currently unique across types, so a class alone
    /// identifies its type. A class shared by two types would break this.
    pub fn asset_type(self) -> AssetType {
        match self {
            AssetClass::Dove | AssetClass::Rapideye => AssetType::Satellite,
            AssetClass::Dish | AssetClass::Yagi => AssetType::Antenna,
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check an asset name against the naming rule.
///
/// Names are 4-64 ASCII alphanumerics, underscores and dashes, and must not
/// start with an underscore or dash.
///
/// # Examples
///
/// ```
/// use plassets_core::assets::validate_name;
///
/// assert!(validate_name("dove-42").is_ok());
/// assert!(validate_name("_dove").is_err());
/// assert!(validate_name("dov").is_err());
/// ```
pub fn validate_name(candidate: &str) -> Result<(), AssetError> {
    if NAME_RE.is_match(candidate) {
        Ok(())
    } else {
        Err(AssetError::InvalidName(candidate.to_string()))
    }
}

/// Parse an asset type.
pub fn validate_type(candidate: &str) -> Result<AssetType, AssetError> {
    AssetType::ALL
        .into_iter()
        .find(|t| t.as_str() == candidate)
        .ok_or_else(|| AssetError::InvalidType(candidate.to_string()))
}

/// Parse an asset class, which must belong to `for_type`.
pub fn validate_class(candidate: &str, for_type: AssetType) -> Result<AssetClass, AssetError> {
    for_type
        .classes()
        .iter()
        .copied()
        .find(|c| c.as_str() == candidate)
        .ok_or_else(|| AssetError::InvalidClass {
            asset_type: for_type,
            class: candidate.to_string(),
        })
}
