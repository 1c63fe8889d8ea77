//! Repository for the `stars` table.

use sqlx::SqlitePool;

use crate::models::star::{CreateStar, Star, UpdateStar};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "name, description, url";

/// Provides CRUD operations for stars.
pub struct StarRepo;

impl StarRepo {
    /// Insert a new star, returning the created row.
    ///
    /// The primary key on `name` makes a duplicate insert fail with a
    /// unique-constraint violation; callers decide how to surface that.
    pub async fn create(pool: &SqlitePool, input: &CreateStar) -> Result<Star, sqlx::Error> {
        let query = format!(
            "INSERT INTO stars (name, description, url)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Star>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Find a star by name. Returns `None` for a missing row rather
    /// than an error, so callers can choose between 404 and an empty
    /// representation.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<Star>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stars WHERE name = ?");
        sqlx::query_as::<_, Star>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all stars in insertion order.
    ///
    /// Ordering by rowid keeps the sequence stable across renames,
    /// since an UPDATE leaves the rowid untouched.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Star>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stars ORDER BY rowid");
        sqlx::query_as::<_, Star>(&query).fetch_all(pool).await
    }

    /// Overwrite all columns of the star currently named `name`.
    ///
    /// The row is matched by `name`, not by `input.name`; a differing
    /// `input.name` renames the star. Returns `false` if no row
    /// matched.
    pub async fn update(
        pool: &SqlitePool,
        name: &str,
        input: &UpdateStar,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE stars SET name = ?, description = ?, url = ? WHERE name = ?",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.url)
        .bind(name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete the star with the given name. Returns `false` if no row
    /// matched.
    pub async fn delete(pool: &SqlitePool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stars WHERE name = ?")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
