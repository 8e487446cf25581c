use crate::room::VALID_STATUSES;
use crate::types::DbId;

/// Which required creation field was missing or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Code,
    Name,
    RoomNumber,
    Category,
}

impl RequiredField {
    /// Human-readable field label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            RequiredField::Code => "Code",
            RequiredField::Name => "Name",
            RequiredField::RoomNumber => "Room number",
            RequiredField::Category => "Category",
        }
    }

    /// Machine-readable error code for the missing field.
    pub fn code(self) -> &'static str {
        match self {
            RequiredField::Code => "MISSING_CODE",
            RequiredField::Name => "MISSING_NAME",
            RequiredField::RoomNumber => "MISSING_ROOM_NUMBER",
            RequiredField::Category => "MISSING_CATEGORY",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Valid ID is required")]
    InvalidId,

    #[error("Category not found")]
    CategoryNotFound { id: DbId },

    #[error("Room not found")]
    RoomNotFound { id: DbId },

    #[error("{label} is required", label = .0.label())]
    MissingField(RequiredField),

    #[error("Category with this code already exists")]
    DuplicateCode,

    #[error("Room number already exists")]
    DuplicateRoomNumber,

    #[error("Status must be one of: {allowed}", allowed = VALID_STATUSES.join(", "))]
    InvalidStatus,
}

impl CoreError {
    /// Machine-readable code surfaced in the `code` field of error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::InvalidId => "INVALID_ID",
            CoreError::CategoryNotFound { .. } => "NOT_FOUND",
            CoreError::RoomNotFound { .. } => "ROOM_NOT_FOUND",
            CoreError::MissingField(field) => field.code(),
            CoreError::DuplicateCode => "DUPLICATE_CODE",
            CoreError::DuplicateRoomNumber => "DUPLICATE_ROOM_NUMBER",
            CoreError::InvalidStatus => "INVALID_STATUS",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::CategoryNotFound { .. } | CoreError::RoomNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_uses_label() {
        let err = CoreError::MissingField(RequiredField::RoomNumber);
        assert_eq!(err.to_string(), "Room number is required");
        assert_eq!(err.code(), "MISSING_ROOM_NUMBER");
    }

    #[test]
    fn invalid_status_lists_allowed_values() {
        assert_eq!(
            CoreError::InvalidStatus.to_string(),
            "Status must be one of: available, occupied, maintenance, reserved"
        );
    }

    #[test]
    fn not_found_codes_differ_per_resource() {
        let category = CoreError::CategoryNotFound { id: 1 };
        let room = CoreError::RoomNotFound { id: 1 };
        assert_eq!(category.code(), "NOT_FOUND");
        assert_eq!(room.code(), "ROOM_NOT_FOUND");
        assert!(category.is_not_found());
        assert!(room.is_not_found());
        assert!(!CoreError::InvalidId.is_not_found());
    }
}
