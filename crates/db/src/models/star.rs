//! Star entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `stars` table.
///
/// `name` is both the primary key and the path segment that addresses
/// the resource externally. The `Default` impl is the all-empty record
/// that `GET /stars/{name}` serves for a missing row.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct Star {
    pub name: String,
    pub description: String,
    pub url: String,
}

/// Form payload for creating a star.
///
/// Absent form fields deserialize to empty strings, never to missing
/// values.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStar {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

/// Form payload for updating a star.
///
/// All three columns are overwritten. `name` is the new value for the
/// row; the row itself is matched by the name from the request path, so
/// a differing `name` renames the star.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStar {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}
