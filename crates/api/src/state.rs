use std::sync::Arc;

use catalog_db::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store handle, created once at startup.
    pub store: Arc<dyn DocumentStore>,
    pub config: Arc<ServerConfig>,
}
