//! Handlers for the asset store.
//!
//! Assets are create-and-read only. Every read returns projections; listings
//! are sorted by name and unpaginated.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use plassets_core::assets::{AssetFilter, AssetProjection, NewAsset};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// POST /assets/v1/
///
/// Create a new asset. Admin only.
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn create_asset(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<AssetProjection>> {
    let input: NewAsset = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid asset body: {e}")))?;

    let asset = state.assets.register(&input).await?;

    Ok(Json(asset.into()))
}

/// GET /assets/v1/
///
/// List every asset.
pub async fn list_assets(State(state): State<AppState>) -> AppResult<Json<Vec<AssetProjection>>> {
    list_filtered(State(state), AssetFilter::All).await
}

/// GET /assets/v1/{name}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<AssetProjection>> {
    let asset = state.assets.get_by_name(&name).await?;

    Ok(Json(asset.into()))
}

/// GET /assets/v1/{sat,ant}[/{class}]
///
/// List the assets matching a fixed filter. Mounted once per lookup path.
pub async fn list_filtered(
    State(state): State<AppState>,
    filter: AssetFilter,
) -> AppResult<Json<Vec<AssetProjection>>> {
    let assets = state.assets.list(filter).await?;

    Ok(Json(assets.into_iter().map(AssetProjection::from).collect()))
}
