//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO holding the raw request body
//! - A normalized insert struct built from the create DTO
//! - A `Deserialize` update DTO (all `Option` fields) and its normalized
//!   change set
//! - A list filter

use serde::{Deserialize, Deserializer};

pub mod room;
pub mod room_category;

/// Deserialize a nullable field so that an explicit `null` is kept apart
/// from an absent key.
///
/// Use with `#[serde(default, deserialize_with = "...")]`: absent yields
/// `None`, `null` yields `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Any JSON scalar accepted where text is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Int(n) => n.to_string(),
            Scalar::UInt(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Deserialize an optional text field that also accepts numbers and
/// booleans, storing their textual form (`101` becomes `"101"`).
///
/// Use with `#[serde(default, deserialize_with = "...")]`.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// [`nullable`] and [`text`] combined: `null` yields `Some(None)`, a scalar
/// yields its text.
pub(crate) fn nullable_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(Some)
}
