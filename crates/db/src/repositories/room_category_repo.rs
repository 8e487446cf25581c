//! Repository for the `room_categories` table.

use chrono::Utc;
use roomdesk_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::room_category::{
    NewRoomCategory, RoomCategory, RoomCategoryChanges, RoomCategoryFilter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, name, description, created_at";

/// Provides CRUD operations for room categories.
pub struct RoomCategoryRepo;

impl RoomCategoryRepo {
    /// Insert a new category stamped with the current time, returning the
    /// created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &NewRoomCategory,
    ) -> Result<RoomCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO room_categories (code, name, description, created_at) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomCategory>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<RoomCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM room_categories WHERE id = ?1");
        sqlx::query_as::<_, RoomCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its (already normalized) code.
    pub async fn find_by_code(
        pool: &SqlitePool,
        code: &str,
    ) -> Result<Option<RoomCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM room_categories WHERE code = ?1");
        sqlx::query_as::<_, RoomCategory>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List categories ordered by code, optionally filtered by a substring of
    /// the code or name.
    pub async fn list(
        pool: &SqlitePool,
        filter: &RoomCategoryFilter,
    ) -> Result<Vec<RoomCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_categories \
             WHERE ?1 IS NULL OR code LIKE ?1 OR name LIKE ?1 \
             ORDER BY code ASC \
             LIMIT ?2 OFFSET ?3"
        );
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));
        sqlx::query_as::<_, RoomCategory>(&query)
            .bind(pattern)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        changes: &RoomCategoryChanges,
    ) -> Result<Option<RoomCategory>, sqlx::Error> {
        let description_provided = changes.description.is_some();
        let description_value = changes.description.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE room_categories SET \
                code        = COALESCE(?2, code), \
                name        = COALESCE(?3, name), \
                description = CASE WHEN ?4 THEN ?5 ELSE description END \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomCategory>(&query)
            .bind(id)
            .bind(changes.code.as_deref())
            .bind(changes.name.as_deref())
            .bind(description_provided)
            .bind(description_value)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category, returning the removed row.
    ///
    /// Rooms referencing the code are left untouched.
    pub async fn delete(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<RoomCategory>, sqlx::Error> {
        let query = format!("DELETE FROM room_categories WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, RoomCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of categories.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM room_categories")
            .fetch_one(pool)
            .await
    }
}
