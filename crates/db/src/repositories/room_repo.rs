//! Repository for the `rooms` table.

use chrono::Utc;
use roomdesk_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::room::{NewRoom, Room, RoomChanges, RoomFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_number, category, floor, status, created_at, updated_at";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row. `created_at` and
    /// `updated_at` share the same instant.
    pub async fn create(pool: &SqlitePool, input: &NewRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (room_number, category, floor, status, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.room_number)
            .bind(&input.category)
            .bind(input.floor)
            .bind(input.status.as_str())
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a room by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = ?1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a room by its (already trimmed) room number.
    pub async fn find_by_room_number(
        pool: &SqlitePool,
        room_number: &str,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE room_number = ?1");
        sqlx::query_as::<_, Room>(&query)
            .bind(room_number)
            .fetch_optional(pool)
            .await
    }

    /// List rooms matching every set filter, ordered by floor then room
    /// number.
    pub async fn list(pool: &SqlitePool, filter: &RoomFilter) -> Result<Vec<Room>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filter.search.is_some() {
            conditions.push(format!("room_number LIKE ?{bind_idx}"));
            bind_idx += 1;
        }
        if filter.floor.is_some() {
            conditions.push(format!("floor = ?{bind_idx}"));
            bind_idx += 1;
        }
        if filter.category.is_some() {
            conditions.push(format!("category = ?{bind_idx}"));
            bind_idx += 1;
        }
        if filter.status.is_some() {
            conditions.push(format!("status = ?{bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM rooms \
             {where_clause} \
             ORDER BY floor ASC, room_number ASC \
             LIMIT ?{bind_idx} OFFSET ?{next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Room>(&query);

        // Bind dynamic parameters in order.
        if let Some(ref search) = filter.search {
            q = q.bind(format!("%{search}%"));
        }
        if let Some(floor) = filter.floor {
            q = q.bind(floor);
        }
        if let Some(ref category) = filter.category {
            q = q.bind(category.clone());
        }
        if let Some(ref status) = filter.status {
            q = q.bind(status.clone());
        }

        q = q.bind(filter.limit).bind(filter.offset);
        q.fetch_all(pool).await
    }

    /// Update a room. Only non-`None` fields are applied; `updated_at` is
    /// refreshed unconditionally.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        changes: &RoomChanges,
    ) -> Result<Option<Room>, sqlx::Error> {
        let floor_provided = changes.floor.is_some();
        let floor_value = changes.floor.flatten();

        let query = format!(
            "UPDATE rooms SET \
                room_number = COALESCE(?2, room_number), \
                category    = COALESCE(?3, category), \
                floor       = CASE WHEN ?4 THEN ?5 ELSE floor END, \
                status      = COALESCE(?6, status), \
                updated_at  = ?7 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(changes.room_number.as_deref())
            .bind(changes.category.as_deref())
            .bind(floor_provided)
            .bind(floor_value)
            .bind(changes.status.map(|s| s.as_str()))
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a room, returning the removed row.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("DELETE FROM rooms WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of rooms.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(pool)
            .await
    }
}
