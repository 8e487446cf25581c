//! Query parameter types for API handlers.
//!
//! Every value is taken as a raw string so handlers decide how malformed
//! input is reported: a bad `id` is `INVALID_ID`, a bad `floor` filter is
//! ignored, a bad `limit` falls back to the default. A key given more than
//! once uses its first value.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use roomdesk_core::error::CoreError;
use roomdesk_core::params::{clamp_limit, clamp_offset, parse_id, present};
use roomdesk_core::types::DbId;

use crate::error::AppError;

/// Decoded query string, first value per key.
#[derive(Debug, Default)]
pub struct QueryValues(HashMap<String, String>);

impl QueryValues {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut values = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            values.entry(key).or_insert(value);
        }
        Self(values)
    }

    fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }
}

/// Extractor for the parameter structs below.
///
/// Rejections are reported through [`AppError`] so they share the JSON error
/// envelope.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: From<QueryValues> + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        Ok(Self(T::from(QueryValues::from_pairs(pairs))))
    }
}

/// `?id=` for the single-row verbs (PUT, DELETE).
#[derive(Debug, Default)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    pub fn id(&self) -> Result<DbId, CoreError> {
        parse_id(self.id.as_deref())
    }
}

impl From<QueryValues> for IdParams {
    fn from(mut q: QueryValues) -> Self {
        Self { id: q.take("id") }
    }
}

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationParams {
    fn take(q: &mut QueryValues) -> Self {
        Self {
            limit: q.take("limit"),
            offset: q.take("offset"),
        }
    }

    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit.as_deref())
    }

    pub fn offset(&self) -> i64 {
        clamp_offset(self.offset.as_deref())
    }
}

/// GET `/room-categories` parameters.
#[derive(Debug, Default)]
pub struct RoomCategoryQuery {
    pub id: Option<String>,
    pub search: Option<String>,
    pub page: PaginationParams,
}

impl RoomCategoryQuery {
    /// The `id` to fetch, when the request targets a single row.
    pub fn single_id(&self) -> Option<&str> {
        present(self.id.as_deref())
    }
}

impl From<QueryValues> for RoomCategoryQuery {
    fn from(mut q: QueryValues) -> Self {
        Self {
            id: q.take("id"),
            search: q.take("search"),
            page: PaginationParams::take(&mut q),
        }
    }
}

/// GET `/rooms` parameters.
#[derive(Debug, Default)]
pub struct RoomQuery {
    pub id: Option<String>,
    pub search: Option<String>,
    pub floor: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub page: PaginationParams,
}

impl RoomQuery {
    /// The `id` to fetch, when the request targets a single row.
    pub fn single_id(&self) -> Option<&str> {
        present(self.id.as_deref())
    }
}

impl From<QueryValues> for RoomQuery {
    fn from(mut q: QueryValues) -> Self {
        Self {
            id: q.take("id"),
            search: q.take("search"),
            floor: q.take("floor"),
            category: q.take("category"),
            status: q.take("status"),
            page: PaginationParams::take(&mut q),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::Uri;

    use super::*;

    fn parse<T: From<QueryValues>>(uri: &'static str) -> T {
        let uri = Uri::from_static(uri);
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri).unwrap();
        T::from(QueryValues::from_pairs(pairs))
    }

    #[test]
    fn empty_id_selects_list() {
        let q: RoomQuery = parse("/rooms?id=&floor=3");
        assert_eq!(q.single_id(), None);
        assert_eq!(q.floor.as_deref(), Some("3"));
    }

    #[test]
    fn id_must_be_an_integer() {
        let q: IdParams = parse("/rooms?id=5abc");
        assert_matches!(q.id(), Err(CoreError::InvalidId));

        let q: IdParams = parse("/rooms");
        assert_matches!(q.id(), Err(CoreError::InvalidId));

        let q: IdParams = parse("/rooms?id=42");
        assert_matches!(q.id(), Ok(42));
    }

    #[test]
    fn pagination_is_clamped() {
        let q: RoomCategoryQuery = parse("/room-categories?search=sea&limit=500&offset=-4");
        assert_eq!(q.search.as_deref(), Some("sea"));
        assert_eq!(q.page.limit(), 100);
        assert_eq!(q.page.offset(), 0);

        let q: RoomCategoryQuery = parse("/room-categories?limit=abc");
        assert_eq!(q.page.limit(), 50);
    }

    #[test]
    fn repeated_key_keeps_first_value() {
        let q: RoomQuery = parse("/rooms?limit=5&limit=6&status=occupied&status=vip");
        assert_eq!(q.page.limit(), 5);
        assert_eq!(q.status.as_deref(), Some("occupied"));
    }

    #[test]
    fn values_are_percent_decoded() {
        let q: RoomQuery = parse("/rooms?search=12%2005&category=d+k");
        assert_eq!(q.search.as_deref(), Some("12 05"));
        assert_eq!(q.category.as_deref(), Some("d k"));
    }
}
