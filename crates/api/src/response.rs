//! Response payloads that are not a bare resource.
//!
//! Successful reads and writes return the row (or array of rows) directly;
//! only deletes wrap the removed row in a confirmation.

use roomdesk_db::models::room::Room;
use roomdesk_db::models::room_category::RoomCategory;
use serde::Serialize;

/// `DELETE /room-categories` confirmation.
#[derive(Debug, Serialize)]
pub struct CategoryDeleted {
    pub message: &'static str,
    pub category: RoomCategory,
}

impl CategoryDeleted {
    pub fn new(category: RoomCategory) -> Self {
        Self {
            message: "Category deleted successfully",
            category,
        }
    }
}

/// `DELETE /rooms` confirmation.
#[derive(Debug, Serialize)]
pub struct RoomDeleted {
    pub message: &'static str,
    pub room: Room,
}

impl RoomDeleted {
    pub fn new(room: Room) -> Self {
        Self {
            message: "Room deleted successfully",
            room,
        }
    }
}
