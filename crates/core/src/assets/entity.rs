//! The validated, write-once asset record.
//!
//! An [`Asset`] can only be obtained through [`Asset::create`] (new records,
//! checked for name uniqueness) or [`Asset::validate`] (rebuilding a record
//! that already exists). Both run the same ordered pipeline:
//!
//! 1. name: format, then uniqueness (`create` only)
//! 2. type
//! 3. class, against the type from step 2
//! 4. each detail, against the registry row for (type, class)
//!
//! The first failure aborts construction; no partially built asset escapes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::details::{describe_field, DetailValue, Details};
use super::schema::{validate_class, validate_name, validate_type, AssetClass, AssetType};
use super::AssetError;

/// Answers whether an asset name is already taken.
///
/// Implemented by the persistence layer. The answer is a best-effort
/// pre-check; the store's own unique key remains authoritative.
#[async_trait]
pub trait NameRegistry: Send + Sync {
    type Error: From<AssetError> + Send;

    async fn is_name_taken(&self, name: &str) -> Result<bool, Self::Error>;
}

/// Raw, unvalidated asset input as received from a client.
///
/// Fields are kept as JSON values so that a wrongly typed `name`, `type` or
/// `class` is reported by the validation pipeline like any other bad value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAsset {
    #[serde(default)]
    pub name: Value,
    #[serde(default, rename = "type")]
    pub asset_type: Value,
    #[serde(default, rename = "class")]
    pub asset_class: Value,
    #[serde(default)]
    pub details: Option<Map<String, Value>>,
}

impl NewAsset {
    pub fn new(name: &str, asset_type: &str, asset_class: &str) -> Self {
        Self {
            name: Value::from(name),
            asset_type: Value::from(asset_type),
            asset_class: Value::from(asset_class),
            details: None,
        }
    }

    /// Add a detail entry. A repeated field replaces the earlier value.
    pub fn with_detail(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(field.to_string(), value.into());
        self
    }
}

/// Externally visible form of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetProjection {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(rename = "class")]
    pub asset_class: AssetClass,
    pub details: Details,
}

/// A validated asset. Name, type and class never change after construction,
/// and details are not writable at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    name: String,
    asset_type: AssetType,
    asset_class: AssetClass,
    details: Details,
}

impl Asset {
    /// Validate `input` and check its name against `registry`.
    pub async fn create<R>(registry: &R, input: &NewAsset) -> Result<Self, R::Error>
    where
        R: NameRegistry + ?Sized,
    {
        let name = parse_name(&input.name)?;
        if registry.is_name_taken(name).await? {
            return Err(AssetError::NameConflict(name.to_string()).into());
        }
        Ok(Self::assemble(name, input)?)
    }

    /// Validate `input` without consulting any registry.
    ///
    /// Used to rebuild snapshots of records that already exist.
    pub fn validate(input: &NewAsset) -> Result<Self, AssetError> {
        let name = parse_name(&input.name)?;
        Self::assemble(name, input)
    }

    fn assemble(name: &str, input: &NewAsset) -> Result<Self, AssetError> {
        let asset_type = parse_type(&input.asset_type)?;
        let asset_class = parse_class(&input.asset_class, asset_type)?;

        let mut details = Details::new();
        for (field, value) in input.details.iter().flatten() {
            let kind = describe_field(asset_type, asset_class, field).ok_or_else(|| {
                AssetError::UnknownDetail {
                    field: field.clone(),
                    asset_type,
                    asset_class,
                }
            })?;
            details.insert(field.clone(), DetailValue::from_json(field, kind, value)?);
        }

        Ok(Self {
            name: name.to_string(),
            asset_type,
            asset_class,
            details,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn asset_type(&self) -> AssetType {
        self.asset_type
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    /// A single detail. `None` when unset or not applicable to the class.
    pub fn detail(&self, field: &str) -> Option<DetailValue> {
        self.details.get(field).copied()
    }

    /// All details that were set.
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// The name was assigned at construction; every reassignment fails.
    pub fn set_name(&mut self, _name: &str) -> Result<(), AssetError> {
        Err(AssetError::Immutable { field: "name" })
    }

    /// The type was assigned at construction; every reassignment fails.
    pub fn set_asset_type(&mut self, _asset_type: &str) -> Result<(), AssetError> {
        Err(AssetError::Immutable { field: "type" })
    }

    /// The class was assigned at construction; every reassignment fails.
    pub fn set_asset_class(&mut self, _asset_class: &str) -> Result<(), AssetError> {
        Err(AssetError::Immutable { field: "class" })
    }

    pub fn to_projection(&self) -> AssetProjection {
        AssetProjection {
            name: self.name.clone(),
            asset_type: self.asset_type,
            asset_class: self.asset_class,
            details: self.details.clone(),
        }
    }
}

impl From<Asset> for AssetProjection {
    fn from(asset: Asset) -> Self {
        AssetProjection {
            name: asset.name,
            asset_type: asset.asset_type,
            asset_class: asset.asset_class,
            details: asset.details,
        }
    }
}

fn parse_name(value: &Value) -> Result<&str, AssetError> {
    let name = value
        .as_str()
        .ok_or_else(|| AssetError::InvalidName(value.to_string()))?;
    validate_name(name)?;
    Ok(name)
}

fn parse_type(value: &Value) -> Result<AssetType, AssetError> {
    match value.as_str() {
        Some(candidate) => validate_type(candidate),
        None => Err(AssetError::InvalidType(value.to_string())),
    }
}

fn parse_class(value: &Value, asset_type: AssetType) -> Result<AssetClass, AssetError> {
    match value.as_str() {
        Some(candidate) => validate_class(candidate, asset_type),
        None => Err(AssetError::InvalidClass {
            asset_type,
            class: value.to_string(),
        }),
    }
}
