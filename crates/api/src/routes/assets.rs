//! Route definitions for the asset store.
//!
//! All routes live under [`ASSETS_PREFIX`].

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use plassets_core::assets::filtered_lookups;

use crate::handlers::assets;
use crate::state::AppState;

pub const ASSETS_PREFIX: &str = "/assets/v1";

/// Asset routes mounted at `/assets/v1`.
///
/// ```text
/// GET    /                  -> list_assets
/// POST   /                  -> create_asset (admin only)
/// GET    /{name}            -> get_asset
/// GET    /sat               -> satellites
/// GET    /sat/dove          -> dove satellites
/// GET    /sat/rapideye      -> rapideye satellites
/// GET    /ant               -> antennas
/// GET    /ant/dish          -> dish antennas
/// GET    /ant/yagi          -> yagi antennas
/// ```
///
/// The root and every filter path also answer with a trailing slash. Any
/// other method on these paths is refused with 405.
pub fn router() -> Router<AppState> {
    let root = get(assets::list_assets).post(assets::create_asset);

    let mut router = Router::new()
        .route(ASSETS_PREFIX, root.clone())
        .route(&format!("{ASSETS_PREFIX}/"), root)
        .route(&format!("{ASSETS_PREFIX}/{{name}}"), get(assets::get_asset));

    for (path, filter) in filtered_lookups() {
        let lookup = get(move |state: State<AppState>| assets::list_filtered(state, filter));
        router = router
            .route(&format!("{ASSETS_PREFIX}{path}"), lookup.clone())
            .route(&format!("{ASSETS_PREFIX}{path}/"), lookup);
    }

    router
}
