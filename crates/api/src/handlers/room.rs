//! Handlers for the `/rooms` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roomdesk_core::error::CoreError;
use roomdesk_core::normalize::{lower, upper};
use roomdesk_core::params::{parse_id, parse_leading_int};
use roomdesk_core::room::{derive_floor, normalize_category, normalize_room_number, RoomStatus};
use roomdesk_core::types::DbId;
use roomdesk_db::models::room::{CreateRoom, NewRoom, Room, RoomChanges, RoomFilter, UpdateRoom};
use roomdesk_db::repositories::RoomRepo;
use roomdesk_db::DbPool;

use crate::error::AppResult;
use crate::query::{IdParams, QueryParams, RoomQuery};
use crate::response::RoomDeleted;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_existing(pool: &DbPool, id: DbId) -> AppResult<Room> {
    RoomRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::RoomNotFound { id }.into())
}

/// Build the list filter. Empty parameters are ignored, as is a `floor`
/// that does not parse.
fn list_filter(params: &RoomQuery) -> RoomFilter {
    let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
    RoomFilter {
        search: non_empty(&params.search),
        floor: non_empty(&params.floor)
            .and_then(|f| parse_leading_int(&f))
            .and_then(|f| i32::try_from(f).ok()),
        category: non_empty(&params.category).map(|c| upper(&c)),
        status: non_empty(&params.status).map(|s| lower(&s)),
        limit: params.page.limit(),
        offset: params.page.offset(),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/rooms?id=
/// GET /api/rooms?search=&floor=&category=&status=&limit=&offset=
///
/// Fetch one room by id, or list rooms ordered by floor then room number.
pub async fn get(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<RoomQuery>,
) -> AppResult<Response> {
    if let Some(raw_id) = params.single_id() {
        let id = parse_id(Some(raw_id))?;
        let room = find_existing(&state.pool, id).await?;
        return Ok(Json(room).into_response());
    }

    let rooms = RoomRepo::list(&state.pool, &list_filter(&params)).await?;
    Ok(Json(rooms).into_response())
}

/// POST /api/rooms
///
/// Create a room. When no floor is given it is derived from the room number.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateRoom>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;

    let room_number = normalize_room_number(input.room_number.as_deref())?;
    let category = normalize_category(input.category.as_deref())?;
    let status = RoomStatus::parse_or_default(input.status.as_deref())?;
    let floor = input.floor.or_else(|| derive_floor(&room_number));

    if RoomRepo::find_by_room_number(&state.pool, &room_number)
        .await?
        .is_some()
    {
        return Err(CoreError::DuplicateRoomNumber.into());
    }

    let new = NewRoom {
        room_number,
        category,
        floor,
        status,
    };
    let room = RoomRepo::create(&state.pool, &new).await?;
    tracing::info!(id = room.id, room_number = %room.room_number, "Room created");
    Ok((StatusCode::CREATED, Json(room)))
}

/// PUT /api/rooms?id=
///
/// Partially update a room. `updated_at` is refreshed even when nothing else
/// changes.
pub async fn update(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
    body: Result<Json<UpdateRoom>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = params.id()?;
    find_existing(&state.pool, id).await?;
    let Json(input) = body?;

    let mut changes = RoomChanges::default();

    if let Some(raw) = input.room_number.as_deref() {
        let room_number = raw.trim().to_string();
        // A match on this room's own id is not a conflict.
        if let Some(holder) = RoomRepo::find_by_room_number(&state.pool, &room_number).await? {
            if holder.id != id {
                return Err(CoreError::DuplicateRoomNumber.into());
            }
        }
        changes.room_number = Some(room_number);
    }

    if let Some(category) = input.category.as_deref() {
        changes.category = Some(upper(category));
    }

    changes.floor = input.floor;

    if let Some(status) = input.status.as_deref() {
        changes.status = Some(RoomStatus::parse(status)?);
    }

    let room = RoomRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(CoreError::RoomNotFound { id })?;
    tracing::info!(id, status = %room.status, "Room updated");
    Ok(Json(room))
}

/// DELETE /api/rooms?id=
pub async fn delete(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.id()?;
    let room = RoomRepo::delete(&state.pool, id)
        .await?
        .ok_or(CoreError::RoomNotFound { id })?;
    tracing::info!(id, room_number = %room.room_number, "Room deleted");
    Ok(Json(RoomDeleted::new(room)))
}
