//! Room category code rules.

use crate::error::{CoreError, RequiredField};
use crate::normalize::{required, upper};

/// Normalize a required category code: trimmed and uppercased.
pub fn normalize_code(raw: Option<&str>) -> Result<String, CoreError> {
    required(raw, RequiredField::Code).map(|code| upper(&code))
}

/// Normalize a code supplied on update. Blank is allowed here; only
/// creation requires a code.
pub fn normalize_code_change(raw: &str) -> String {
    upper(raw)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn code_is_trimmed_and_uppercased() {
        assert_eq!(normalize_code(Some(" dts ")).unwrap(), "DTS");
    }

    #[test]
    fn blank_code_is_missing() {
        assert_matches!(
            normalize_code(Some(" ")),
            Err(CoreError::MissingField(RequiredField::Code))
        );
    }

    #[test]
    fn lower_and_upper_codes_collide() {
        assert_eq!(normalize_code(Some("dts")).unwrap(), normalize_code_change("DTS"));
        assert_eq!(normalize_code_change(" dtg "), "DTG");
    }
}
