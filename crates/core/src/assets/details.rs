//! Detail field registry.
//!
//! [`DETAIL_FIELDS`] is the single source of truth for which optional,
//! class-scoped extension fields exist and what kind of value each holds.
//! Adding a field or class means adding a row here.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::{AssetClass, AssetType};
use super::AssetError;

/// The value kind a detail field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Float,
    Bool,
}

impl fmt::Display for DetailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailKind::Float => f.write_str("a float"),
            DetailKind::Bool => f.write_str("a boolean"),
        }
    }
}

/// A typed detail value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Bool(bool),
    Float(f64),
}

impl DetailValue {
    /// Convert a raw JSON value into a detail of the `expected` kind.
    ///
    /// Floats must carry a floating-point representation: `1.0` is a float,
    /// `1` is an integer and does not match.
    pub fn from_json(field: &str, expected: DetailKind, value: &Value) -> Result<Self, AssetError> {
        match (expected, value) {
            (DetailKind::Float, Value::Number(n)) if n.is_f64() => {
                n.as_f64().map(DetailValue::Float).ok_or_else(|| mismatch(field, expected, value))
            }
            (DetailKind::Bool, Value::Bool(b)) => Ok(DetailValue::Bool(*b)),
            _ => Err(mismatch(field, expected, value)),
        }
    }
}

impl From<DetailValue> for Value {
    fn from(value: DetailValue) -> Self {
        match value {
            DetailValue::Float(v) => Value::from(v),
            DetailValue::Bool(v) => Value::Bool(v),
        }
    }
}

/// Details keyed by field name, ordered for stable serialization.
pub type Details = BTreeMap<String, DetailValue>;

fn mismatch(field: &str, expected: DetailKind, value: &Value) -> AssetError {
    AssetError::DetailTypeMismatch {
        field: field.to_string(),
        expected,
        found: json_kind(value),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One row of the registry.
#[derive(Debug, Clone, Copy)]
pub struct DetailField {
    pub asset_type: AssetType,
    pub asset_class: AssetClass,
    pub name: &'static str,
    pub kind: DetailKind,
}

pub static DETAIL_FIELDS: &[DetailField] = &[
    DetailField {
        asset_type: AssetType::Antenna,
        asset_class: AssetClass::Yagi,
        name: "gain",
        kind: DetailKind::Float,
    },
    DetailField {
        asset_type: AssetType::Antenna,
        asset_class: AssetClass::Dish,
        name: "diameter",
        kind: DetailKind::Float,
    },
    DetailField {
        asset_type: AssetType::Antenna,
        asset_class: AssetClass::Dish,
        name: "radome",
        kind: DetailKind::Bool,
    },
];

/// Look up the kind of `field` for the given type and class.
///
/// Returns `None` when the field does not exist for that pair, including
/// fields that exist only under a different class.
pub fn describe_field(
    asset_type: AssetType,
    asset_class: AssetClass,
    field: &str,
) -> Option<DetailKind> {
    DETAIL_FIELDS
        .iter()
        .find(|f| f.asset_type == asset_type && f.asset_class == asset_class && f.name == field)
        .map(|f| f.kind)
}

/// All fields permitted for the given type and class.
pub fn permitted_fields(
    asset_type: AssetType,
    asset_class: AssetClass,
) -> impl Iterator<Item = (&'static str, DetailKind)> {
    DETAIL_FIELDS
        .iter()
        .filter(move |f| f.asset_type == asset_type && f.asset_class == asset_class)
        .map(|f| (f.name, f.kind))
}

/// Comma-separated names of the permitted fields, or `none`.
pub(crate) fn permitted_summary(asset_type: &AssetType, asset_class: &AssetClass) -> String {
    let names: Vec<_> = permitted_fields(*asset_type, *asset_class)
        .map(|(name, _)| name)
        .collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
