//! Request handlers.
//!
//! Each submodule provides the async handlers (get, create, update, delete)
//! for a single resource. Single-row verbs address the row with the `id`
//! query parameter. Handlers normalize and validate input with
//! `roomdesk_core`, delegate storage to the matching repository in
//! `roomdesk_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod room;
pub mod room_category;
