//! Domain rules for the roomdesk service.
//!
//! Everything here is pure logic with no I/O so the repository layer, the
//! HTTP layer and any future tooling can share it.

pub mod error;
pub mod normalize;
pub mod params;
pub mod room;
pub mod room_category;
pub mod types;
