//! Handlers for the `/room-categories` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roomdesk_core::error::{CoreError, RequiredField};
use roomdesk_core::normalize::{optional_text, required};
use roomdesk_core::params::parse_id;
use roomdesk_core::room_category::{normalize_code, normalize_code_change};
use roomdesk_core::types::DbId;
use roomdesk_db::models::room_category::{
    CreateRoomCategory, NewRoomCategory, RoomCategory, RoomCategoryChanges, RoomCategoryFilter,
    UpdateRoomCategory,
};
use roomdesk_db::repositories::RoomCategoryRepo;
use roomdesk_db::DbPool;

use crate::error::AppResult;
use crate::query::{IdParams, QueryParams, RoomCategoryQuery};
use crate::response::CategoryDeleted;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_existing(pool: &DbPool, id: DbId) -> AppResult<RoomCategory> {
    RoomCategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::CategoryNotFound { id }.into())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/room-categories?id=
/// GET /api/room-categories?search=&limit=&offset=
///
/// Fetch one category by id, or list categories ordered by code.
pub async fn get(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<RoomCategoryQuery>,
) -> AppResult<Response> {
    if let Some(raw_id) = params.single_id() {
        let id = parse_id(Some(raw_id))?;
        let category = find_existing(&state.pool, id).await?;
        return Ok(Json(category).into_response());
    }

    let filter = RoomCategoryFilter {
        search: params.search.clone().filter(|s| !s.is_empty()),
        limit: params.page.limit(),
        offset: params.page.offset(),
    };
    let categories = RoomCategoryRepo::list(&state.pool, &filter).await?;
    Ok(Json(categories).into_response())
}

/// POST /api/room-categories
///
/// Create a category. The code is stored trimmed and uppercased and must be
/// unique.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateRoomCategory>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body?;

    let code = normalize_code(input.code.as_deref())?;
    let name = required(input.name.as_deref(), RequiredField::Name)?;
    let new = NewRoomCategory {
        code,
        name,
        description: optional_text(input.description.as_deref()),
    };

    if RoomCategoryRepo::find_by_code(&state.pool, &new.code)
        .await?
        .is_some()
    {
        return Err(CoreError::DuplicateCode.into());
    }

    let category = RoomCategoryRepo::create(&state.pool, &new).await?;
    tracing::info!(id = category.id, code = %category.code, "Room category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/room-categories?id=
///
/// Partially update a category. A changed code is re-checked for uniqueness.
pub async fn update(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
    body: Result<Json<UpdateRoomCategory>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = params.id()?;
    let existing = find_existing(&state.pool, id).await?;
    let Json(input) = body?;

    let mut changes = RoomCategoryChanges::default();

    if let Some(raw) = input.code.as_deref() {
        let code = normalize_code_change(raw);
        if code != existing.code
            && RoomCategoryRepo::find_by_code(&state.pool, &code)
                .await?
                .is_some()
        {
            return Err(CoreError::DuplicateCode.into());
        }
        changes.code = Some(code);
    }

    if let Some(name) = input.name.as_deref() {
        changes.name = Some(name.trim().to_string());
    }

    if let Some(description) = input.description {
        changes.description = Some(optional_text(description.as_deref()));
    }

    let category = RoomCategoryRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(CoreError::CategoryNotFound { id })?;
    tracing::info!(id, code = %category.code, "Room category updated");
    Ok(Json(category))
}

/// DELETE /api/room-categories?id=
///
/// Delete a category. Rooms that reference its code are not checked.
pub async fn delete(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.id()?;
    let category = RoomCategoryRepo::delete(&state.pool, id)
        .await?
        .ok_or(CoreError::CategoryNotFound { id })?;
    tracing::info!(id, code = %category.code, "Room category deleted");
    Ok(Json(CategoryDeleted::new(category)))
}
