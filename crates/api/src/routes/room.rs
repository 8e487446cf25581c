//! Route definitions for rooms.

use axum::routing::get;
use axum::Router;

use crate::handlers::room;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
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
        get(room::get)
            .post(room::create)
            .put(room::update)
            .delete(room::delete),
    )
}
