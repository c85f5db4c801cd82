//! Repository for the `assets` table.
//!
//! The uniqueness check done during [`Asset::create`] is a best-effort
//! pre-filter. Two concurrent creates of the same name can both pass it; the
//! primary key on `name` then lets exactly one insert through and the other
//! is reported as [`AssetError::NameConflict`].
//!
//! Listings are unpaginated snapshots sorted by name.

use async_trait::async_trait;
use plassets_core::assets::{
    Asset, AssetClass, AssetError, AssetFilter, AssetType, NameRegistry, NewAsset,
};

use crate::error::StoreError;
use crate::models::asset::AssetRow;
use crate::DbPool;

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "name, \"type\" AS asset_type, \"class\" AS asset_class, details";

/// Store handle for assets. Cheap to clone; clones share the pool.
///
/// Holds its pool rather than taking one per call so it can serve as the
/// [`NameRegistry`] handed to [`Asset::create`].
#[derive(Debug, Clone)]
pub struct AssetRepo {
    pool: DbPool,
}

impl AssetRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Validate `input`, check its name, and persist the resulting asset.
    pub async fn register(&self, input: &NewAsset) -> Result<Asset, StoreError> {
        let asset = Asset::create(self, input).await?;
        self.create(&asset).await?;

        tracing::info!(
            name = %asset.name(),
            asset_type = %asset.asset_type(),
            asset_class = %asset.asset_class(),
            "Asset created",
        );

        Ok(asset)
    }

    /// Persist an already validated asset.
    pub async fn create(&self, asset: &Asset) -> Result<(), StoreError> {
        let details = serde_json::to_string(asset.details())?;

        let result = sqlx::query(
            "INSERT INTO assets (name, \"type\", \"class\", details) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(asset.name())
        .bind(asset.asset_type().as_str())
        .bind(asset.asset_class().as_str())
        .bind(&details)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::debug!(name = %asset.name(), "Insert lost a duplicate-name race");
                Err(AssetError::NameConflict(asset.name().to_string()).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Whether an asset with this name exists.
    pub async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM assets WHERE name = ?1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(found != 0)
    }

    /// Find an asset by name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Asset>, StoreError> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE name = ?1");
        let row = sqlx::query_as::<_, AssetRow>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        row.map(AssetRow::into_asset).transpose()
    }

    /// Get an asset by name, failing with [`AssetError::NotFound`].
    pub async fn get_by_name(&self, name: &str) -> Result<Asset, StoreError> {
        self.find_by_name(name)
            .await?
            .ok_or_else(|| AssetError::NotFound(name.to_string()).into())
    }

    pub async fn list_all(&self) -> Result<Vec<Asset>, StoreError> {
        self.list(AssetFilter::All).await
    }

    pub async fn list_by_type(&self, asset_type: AssetType) -> Result<Vec<Asset>, StoreError> {
        self.list(AssetFilter::ByType(asset_type)).await
    }

    pub async fn list_by_class(&self, asset_class: AssetClass) -> Result<Vec<Asset>, StoreError> {
        self.list(AssetFilter::ByClass(asset_class)).await
    }

    /// List assets matching `filter`, sorted by name.
    pub async fn list(&self, filter: AssetFilter) -> Result<Vec<Asset>, StoreError> {
        let (asset_type, asset_class) = filter.constraints();

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if asset_type.is_some() {
            conditions.push(format!("\"type\" = ?{bind_idx}"));
            bind_idx += 1;
        }
        if asset_class.is_some() {
            conditions.push(format!("\"class\" = ?{bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT {ASSET_COLUMNS} FROM assets {where_clause} ORDER BY name");

        let mut q = sqlx::query_as::<_, AssetRow>(&query);
        if let Some(t) = asset_type {
            q = q.bind(t.as_str());
        }
        if let Some(c) = asset_class {
            q = q.bind(c.as_str());
        }

        let rows = q.fetch_all(&self.pool).await?;
        tracing::debug!(?filter, count = rows.len(), "Listed assets");

        rows.into_iter().map(AssetRow::into_asset).collect()
    }
}

#[async_trait]
impl NameRegistry for AssetRepo {
    type Error = StoreError;

    async fn is_name_taken(&self, name: &str) -> Result<bool, StoreError> {
        self.exists(name).await
    }
}
