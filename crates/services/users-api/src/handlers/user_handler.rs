//! User handlers.

use axum::{extract::State, routing::get, Router};
use tracing::{debug, warn};

use common::{ApiResponse, AppError, AppResult, Created, OptionExt};
use domain::{
    CreateUser, User, UserResponse, MSG_USER_CREATED, MSG_USER_CREATE_FAILED, MSG_USER_DELETED,
    MSG_USER_DELETE_FAILED, MSG_USER_NOT_FOUND,
};

use crate::extractors::{JsonPayload, UserId};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user with its isOfAge flag", body = crate::openapi::UserListEnvelope)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResponse<Vec<UserResponse>> {
    let users = state.users.list().await;
    debug!("Listing {} user(s)", users.len());
    ApiResponse::success(UserResponse::from_users(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = crate::openapi::UserEnvelope),
        (status = 400, description = "Malformed id", body = crate::openapi::MessageEnvelope),
        (status = 404, description = "User not found", body = crate::openapi::MessageEnvelope)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state
        .users
        .find_one(id)
        .await
        .ok_or_not_found(MSG_USER_NOT_FOUND)?;

    Ok(ApiResponse::success(UserResponse::from(user)))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = crate::openapi::MessageEnvelope),
        (status = 400, description = "Malformed id", body = crate::openapi::MessageEnvelope),
        (status = 500, description = "Repository did not remove the user", body = crate::openapi::MessageEnvelope)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<ApiResponse<String>> {
    if !state.users.delete(id).await {
        warn!("Repository failed to delete user {}", id);
        return Err(AppError::operation_failed(MSG_USER_DELETE_FAILED));
    }

    Ok(ApiResponse::message(MSG_USER_DELETED))
}

/// Create user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = crate::openapi::MessageEnvelope),
        (status = 400, description = "Missing or malformed payload", body = crate::openapi::MessageEnvelope),
        (status = 500, description = "Repository did not store the user", body = crate::openapi::MessageEnvelope)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<CreateUser>,
) -> AppResult<Created<&'static str>> {
    let user = User::from(payload);
    let id = user.id;

    if !state.users.save(user).await {
        warn!("Repository failed to save user {}", id);
        return Err(AppError::operation_failed(MSG_USER_CREATE_FAILED));
    }

    Ok(Created(MSG_USER_CREATED))
}
