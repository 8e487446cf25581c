//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod room_category_repo;
pub mod room_repo;

pub use room_category_repo::RoomCategoryRepo;
pub use room_repo::RoomRepo;
