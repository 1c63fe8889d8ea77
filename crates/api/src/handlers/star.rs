//! Handlers for the `/stars` resource.
//!
//! Each handler is one atomic request/response pair; no state is held
//! across requests beyond the persisted rows themselves.

use axum::extract::{OriginalUri, Path, State};
use axum::http::{header, HeaderMap, HeaderName, StatusCode, Uri};
use axum::{Form, Json};
use stars_db::models::star::{CreateStar, Star, UpdateStar};
use stars_db::repositories::StarRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /stars
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Star>>> {
    let stars = StarRepo::list(&state.pool).await?;
    Ok(Json(stars))
}

/// GET /stars/{*name}
///
/// A missing row serializes as the all-empty record with 200, not as a
/// 404. The repository reports absence distinctly; this representation
/// is chosen here, at the HTTP boundary.
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Star>> {
    let star = StarRepo::find_by_name(&state.pool, &name)
        .await?
        .unwrap_or_default();
    Ok(Json(star))
}

/// POST /stars
///
/// Responds 201 with a `Location` header addressing the new resource,
/// resolved against the request's own URL. A duplicate name surfaces
/// the primary-key violation as a 409 via [`crate::error::AppError`].
pub async fn create(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Form(input): Form<CreateStar>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1])> {
    let star = StarRepo::create(&state.pool, &input).await?;
    let location = star_location(&uri, &headers, &star.name);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

/// PUT /stars/{*name}
///
/// The row is matched by the path name; the form `name` becomes the new
/// value, so a differing one renames the star. Matching zero rows is
/// not an error.
pub async fn update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(input): Form<UpdateStar>,
) -> AppResult<StatusCode> {
    let matched = StarRepo::update(&state.pool, &name, &input).await?;
    if !matched {
        tracing::debug!(%name, "update matched no rows");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /stars/{*name}
///
/// Responds 204 whether or not a row existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    let matched = StarRepo::delete(&state.pool, &name).await?;
    if !matched {
        tracing::debug!(%name, "delete matched no rows");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Form the URL of a star by resolving `/stars/{name}` against the
/// request's own URL: scheme and host preserved, path replaced.
///
/// Server-side request URIs usually carry only a path, so the host
/// falls back to the `Host` header; without either the location stays
/// relative.
fn star_location(uri: &Uri, headers: &HeaderMap, name: &str) -> String {
    let path = format!("/stars/{name}");
    let scheme = uri.scheme_str().unwrap_or("http");
    let host = uri.host().map(str::to_owned).or_else(|| {
        headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_owned)
    });
    match host {
        Some(host) => format!("{scheme}://{host}{path}"),
        None => path,
    }
}
