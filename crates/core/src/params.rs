//! Query-string parsing and pagination clamping shared by list endpoints.

use crate::error::CoreError;
use crate::types::DbId;

/// Default page size when `limit` is absent or unparseable.
pub const DEFAULT_LIMIT: i64 = 50;

/// Hard upper bound on page size.
pub const MAX_LIMIT: i64 = 100;

/// Parse the leading integer of `raw` the lenient way browsers do.
///
/// Leading whitespace and a single sign are accepted, then the longest run
/// of ASCII digits; anything after the digits is ignored. Returns `None`
/// when there are no digits or the value does not fit in an `i64`.
///
/// ```
/// use roomdesk_core::params::parse_leading_int;
/// assert_eq!(parse_leading_int("11"), Some(11));
/// assert_eq!(parse_leading_int("1A"), Some(1));
/// assert_eq!(parse_leading_int("A1"), None);
/// ```
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a required `id` query parameter.
///
/// Unlike the list parameters this is strict: the whole (trimmed) value must
/// be an integer, so `"5abc"` is rejected rather than read as 5 the way a
/// browser-style `parseInt` would.
pub fn parse_id(raw: Option<&str>) -> Result<DbId, CoreError> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<DbId>().ok())
        .ok_or(CoreError::InvalidId)
}

/// Treat an empty `id` parameter the same as an absent one.
///
/// GET switches between fetch-one and list on this.
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Clamp a user-provided limit to `0..=MAX_LIMIT`, defaulting to
/// [`DEFAULT_LIMIT`] when absent or unparseable.
pub fn clamp_limit(raw: Option<&str>) -> i64 {
    raw.and_then(parse_leading_int)
        .unwrap_or(DEFAULT_LIMIT)
        .clamp(0, MAX_LIMIT)
}

/// Clamp a user-provided offset to non-negative, defaulting to zero.
pub fn clamp_offset(raw: Option<&str>) -> i64 {
    raw.and_then(parse_leading_int).unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- parse_leading_int ---------------------------------------------------

    #[test]
    fn leading_int_handles_sign_and_whitespace() {
        assert_eq!(parse_leading_int("  42"), Some(42));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+7"), Some(7));
    }

    #[test]
    fn leading_int_stops_at_first_non_digit() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("3.9"), Some(3));
    }

    #[test]
    fn leading_int_rejects_missing_digits() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("abc"), None);
    }

    #[test]
    fn leading_int_rejects_overflow() {
        assert_eq!(parse_leading_int("99999999999999999999999"), None);
    }

    // -- parse_id ------------------------------------------------------------

    #[test]
    fn parse_id_accepts_integer() {
        assert_eq!(parse_id(Some("5")).unwrap(), 5);
        assert_eq!(parse_id(Some(" 17 ")).unwrap(), 17);
    }

    #[test]
    fn parse_id_rejects_missing_or_garbage() {
        assert_matches!(parse_id(None), Err(CoreError::InvalidId));
        assert_matches!(parse_id(Some("")), Err(CoreError::InvalidId));
        assert_matches!(parse_id(Some("abc")), Err(CoreError::InvalidId));
        assert_matches!(parse_id(Some("5abc")), Err(CoreError::InvalidId));
    }

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
        assert_eq!(clamp_limit(Some("lots")), DEFAULT_LIMIT);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some("200")), MAX_LIMIT);
    }

    #[test]
    fn clamp_limit_floors_at_zero() {
        assert_eq!(clamp_limit(Some("-5")), 0);
        assert_eq!(clamp_limit(Some("0")), 0);
    }

    #[test]
    fn clamp_limit_passes_through_valid_value() {
        assert_eq!(clamp_limit(Some("20")), 20);
    }

    // -- clamp_offset --------------------------------------------------------

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some("x")), 0);
    }

    #[test]
    fn clamp_offset_floors_negative() {
        assert_eq!(clamp_offset(Some("-10")), 0);
        assert_eq!(clamp_offset(Some("30")), 30);
    }
}
