//! Route definitions for the `/stars` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::star;
use crate::state::AppState;

/// Routes mounted at the service root.
///
/// ```text
/// GET    /stars            -> list
/// POST   /stars            -> create
/// GET    /stars/{*name}    -> get_by_name
/// PUT    /stars/{*name}    -> update
/// DELETE /stars/{*name}    -> delete
/// ```
///
/// `{*name}` matches greedily: everything after `/stars/` is the name,
/// slashes included. Any other method/path combination falls through to
/// the framework's 404.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stars", get(star::list).post(star::create))
        .route(
            "/stars/{*name}",
            get(star::get_by_name)
                .put(star::update)
                .delete(star::delete),
        )
}
