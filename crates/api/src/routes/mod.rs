pub mod health;
pub mod star;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree, mounted at the service root.
///
/// ```text
/// /stars             list, create
/// /stars/{*name}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(star::router())
}
