//! Room entity model and DTOs.

use roomdesk_core::room::RoomStatus;
use roomdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: DbId,
    pub room_number: String,
    pub category: String,
    pub floor: Option<i32>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a room.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    pub room_number: Option<String>,
    pub category: Option<String>,
    /// Absent or `null` means derive from the room number.
    pub floor: Option<i32>,
    pub status: Option<String>,
}

/// A normalized room ready to insert.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub room_number: String,
    pub category: String,
    pub floor: Option<i32>,
    pub status: RoomStatus,
}

/// Request body for partially updating a room.
///
/// `floor: null` clears the floor; an absent key keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoom {
    pub room_number: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub floor: Option<Option<i32>>,
    pub status: Option<String>,
}

/// Normalized fields to apply to an existing room. `updated_at` is always
/// refreshed by the repository.
#[derive(Debug, Clone, Default)]
pub struct RoomChanges {
    pub room_number: Option<String>,
    pub category: Option<String>,
    pub floor: Option<Option<i32>>,
    pub status: Option<RoomStatus>,
}

/// List filter for rooms. All set filters are combined with AND.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    /// Substring matched against `room_number`.
    pub search: Option<String>,
    pub floor: Option<i32>,
    /// Already normalized to uppercase.
    pub category: Option<String>,
    /// Already normalized to lowercase.
    pub status: Option<String>,
    pub limit: i64,
    pub offset: i64,
}
