use std::sync::Arc;

use plassets_db::repositories::AssetRepo;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Asset store handle (wraps the connection pool).
    pub assets: AssetRepo,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
