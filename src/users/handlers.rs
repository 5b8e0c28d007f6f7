use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{info, instrument};

use crate::auth::password;
use crate::error::ApiError;
use crate::logs::repo::{self as log_repo, LogAction};
use crate::state::AppState;
use crate::users::dto::{ListQuery, MutationResponse, UpdateUserRequest, UserListResponse};
use crate::users::repo::{User, UserChanges, UserProjection};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/user/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users", get(list_users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserProjection>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    // An empty password is ignored rather than stored as a hash of "".
    let password_hash = match payload.password.as_deref() {
        Some(p) if !p.is_empty() => Some(password::hash_password(p)?),
        _ => None,
    };
    let changes = UserChanges {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        password_hash,
    };

    if changes.is_empty() {
        return Err(ApiError::validation("no fields to update"));
    }

    if !User::update_partial(&state.db, id, changes).await? {
        return Err(ApiError::NotFound);
    }

    log_repo::record(&state.db, id, LogAction::Update).await;
    info!(user_id = id, "user updated");
    Ok(Json(MutationResponse {
        status: "updated",
        id,
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse>, ApiError> {
    if !User::delete(&state.db, id).await? {
        return Err(ApiError::NotFound);
    }

    log_repo::record(&state.db, id, LogAction::Delete).await;
    info!(user_id = id, "user deleted");
    Ok(Json(MutationResponse {
        status: "deleted",
        id,
    }))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<UserListResponse>, ApiError> {
    let (page, limit) = query.pagination()?;
    let (users, total) = User::list(&state.db, page, limit, query.search_term()).await?;
    Ok(Json(UserListResponse {
        page,
        limit,
        total,
        users,
    }))
}
