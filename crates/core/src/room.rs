//! Room status enumeration and room-number rules.

use crate::error::{CoreError, RequiredField};
use crate::normalize::{lower, required, upper};
use crate::params::parse_leading_int;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_OCCUPIED: &str = "occupied";
pub const STATUS_MAINTENANCE: &str = "maintenance";
pub const STATUS_RESERVED: &str = "reserved";

/// All valid status values, in display order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_AVAILABLE,
    STATUS_OCCUPIED,
    STATUS_MAINTENANCE,
    STATUS_RESERVED,
];

/// Occupancy status of a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Available => STATUS_AVAILABLE,
            RoomStatus::Occupied => STATUS_OCCUPIED,
            RoomStatus::Maintenance => STATUS_MAINTENANCE,
            RoomStatus::Reserved => STATUS_RESERVED,
        }
    }

    /// Normalize (trim + lowercase) and validate a raw status value.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match lower(raw).as_str() {
            STATUS_AVAILABLE => Ok(RoomStatus::Available),
            STATUS_OCCUPIED => Ok(RoomStatus::Occupied),
            STATUS_MAINTENANCE => Ok(RoomStatus::Maintenance),
            STATUS_RESERVED => Ok(RoomStatus::Reserved),
            _ => Err(CoreError::InvalidStatus),
        }
    }

    /// Status for a create request: absent or exactly empty means
    /// `available`. Whitespace-only values are still validated and rejected.
    pub fn parse_or_default(raw: Option<&str>) -> Result<Self, CoreError> {
        raw.filter(|s| !s.is_empty())
            .map_or(Ok(RoomStatus::default()), RoomStatus::parse)
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Required fields
// ---------------------------------------------------------------------------

/// Trim a required room number.
pub fn normalize_room_number(raw: Option<&str>) -> Result<String, CoreError> {
    required(raw, RequiredField::RoomNumber)
}

/// Trim and uppercase a required room category.
pub fn normalize_category(raw: Option<&str>) -> Result<String, CoreError> {
    required(raw, RequiredField::Category).map(|category| upper(&category))
}

// ---------------------------------------------------------------------------
// Floor derivation
// ---------------------------------------------------------------------------

/// Derive a floor from a room number by dropping its last two characters.
///
/// `"1103"` yields `Some(11)`; numbers shorter than two characters, a prefix
/// without leading digits, or a value outside `i32` yield `None`. The prefix
/// is parsed leniently, so `"0101"` is floor 1 and `"1A03"` is floor 1.
pub fn derive_floor(room_number: &str) -> Option<i32> {
    let chars: Vec<char> = room_number.chars().collect();
    if chars.len() < 2 {
        return None;
    }
    let prefix: String = chars[..chars.len() - 2].iter().collect();
    parse_leading_int(&prefix).and_then(|n| i32::try_from(n).ok())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn every_listed_status_parses() {
        for status in VALID_STATUSES {
            assert_eq!(RoomStatus::parse(status).unwrap().as_str(), *status);
        }
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!(RoomStatus::parse("Occupied").unwrap(), RoomStatus::Occupied);
        assert_eq!(
            RoomStatus::parse("  MAINTENANCE ").unwrap(),
            RoomStatus::Maintenance
        );
    }

    #[test]
    fn parse_rejects_unknown_status() {
        assert_matches!(RoomStatus::parse("vip"), Err(CoreError::InvalidStatus));
        assert_matches!(RoomStatus::parse(""), Err(CoreError::InvalidStatus));
    }

    #[test]
    fn absent_status_defaults_to_available() {
        assert_eq!(
            RoomStatus::parse_or_default(None).unwrap(),
            RoomStatus::Available
        );
        assert_eq!(
            RoomStatus::parse_or_default(Some("reserved")).unwrap(),
            RoomStatus::Reserved
        );
    }

    #[test]
    fn empty_status_defaults_but_blank_is_rejected() {
        assert_eq!(
            RoomStatus::parse_or_default(Some("")).unwrap(),
            RoomStatus::Available
        );
        assert_matches!(
            RoomStatus::parse_or_default(Some("  ")),
            Err(CoreError::InvalidStatus)
        );
    }

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(RoomStatus::Reserved.to_string(), "reserved");
        assert_eq!(RoomStatus::Occupied.as_str(), "occupied");
    }

    #[test]
    fn required_fields_are_normalized() {
        assert_eq!(normalize_room_number(Some(" 1205 ")).unwrap(), "1205");
        assert_eq!(normalize_category(Some(" dks")).unwrap(), "DKS");
        assert_matches!(
            normalize_room_number(Some("")),
            Err(CoreError::MissingField(RequiredField::RoomNumber))
        );
        assert_matches!(
            normalize_category(None),
            Err(CoreError::MissingField(RequiredField::Category))
        );
    }

    #[test]
    fn floor_from_four_digit_number() {
        assert_eq!(derive_floor("1103"), Some(11));
        assert_eq!(derive_floor("1205"), Some(12));
    }

    #[test]
    fn floor_from_three_digit_number() {
        assert_eq!(derive_floor("305"), Some(3));
    }

    #[test]
    fn floor_none_for_short_numbers() {
        assert_eq!(derive_floor("5"), None);
        assert_eq!(derive_floor(""), None);
        assert_eq!(derive_floor("12"), None);
    }

    #[test]
    fn floor_keeps_lenient_prefix_parse() {
        assert_eq!(derive_floor("0101"), Some(1));
        assert_eq!(derive_floor("1A03"), Some(1));
        assert_eq!(derive_floor("-105"), Some(-1));
        assert_eq!(derive_floor("A12"), None);
        assert_eq!(derive_floor("PH01"), None);
    }
}
