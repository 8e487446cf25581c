//! Route definitions for room categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::room_category;
use crate::state::AppState;

/// Routes mounted at `/room-categories`.
///
/// ```text
/// GET    /?id=     -> get (single row)
/// GET    /         -> get (list)
/// POST   /         -> create
/// PUT    /?id=     -> update
/// DELETE /?id=     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(room_category::get)
            .post(room_category::create)
            .put(room_category::update)
            .delete(room_category::delete),
    )
}
