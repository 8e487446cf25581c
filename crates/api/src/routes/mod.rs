pub mod health;
pub mod room;
pub mod room_category;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /room-categories          GET (one by ?id= or list), POST, PUT ?id=, DELETE ?id=
/// /rooms                    GET (one by ?id= or list), POST, PUT ?id=, DELETE ?id=
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/room-categories", room_category::router())
        .nest("/rooms", room::router())
}
