use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is the only handle to the store; it is opened once at startup
/// and closed after graceful shutdown in `main`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stars_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
