//! Room category entity model and DTOs.

use roomdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `room_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCategory {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Request body for creating a category. Required fields are checked by the
/// handler so they can fail with their own error codes.
///
/// Numbers and booleans are accepted for every field and kept as text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRoomCategory {
    #[serde(default, deserialize_with = "super::text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "super::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::text")]
    pub description: Option<String>,
}

/// A normalized category ready to insert.
#[derive(Debug, Clone)]
pub struct NewRoomCategory {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// Request body for partially updating a category.
///
/// `description: null` clears the description; an absent key keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRoomCategory {
    #[serde(default, deserialize_with = "super::text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "super::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::nullable_text")]
    pub description: Option<Option<String>>,
}

/// Normalized fields to apply to an existing category. `None` leaves the
/// column untouched.
#[derive(Debug, Clone, Default)]
pub struct RoomCategoryChanges {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

/// List filter for categories.
#[derive(Debug, Clone)]
pub struct RoomCategoryFilter {
    /// Case-insensitive substring matched against `code` or `name`.
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}
