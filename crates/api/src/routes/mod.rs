pub mod assets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree (health plus the asset API).
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(health::router()).merge(assets::router())
}
