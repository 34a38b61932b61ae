//! User management handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use common::{ApiResponse, AppResult, Created, NoContent};
use domain::{CreateUserRequest, UpdateUserRequest, User};

use crate::api::extractors::{EmailPath, JsonBody, UserId};
use crate::api::AppState;

/// Create user routes, mounted under `/api/v1`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/email/:email", get(get_user_by_email))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid body, failed validation or duplicate email"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> AppResult<Created<User>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Created(user))
}

/// List all users, newest first
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    let users = state.user_service.get_all_users().await?;
    Ok(Json(ApiResponse::success(users)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.user_service.get_user_by_id(id).await?;
    Ok(Json(ApiResponse::success(user)))
}

/// Replace a user's name, email and age
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid id or body, failed validation or duplicate email"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(ApiResponse::success(user)))
}

/// Permanently delete a user
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(State(state): State<AppState>, UserId(id): UserId) -> AppResult<NoContent> {
    state.user_service.delete_user(id).await?;
    Ok(NoContent)
}

/// Get user by email address
#[utoipa::path(
    get,
    path = "/api/v1/users/email/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Email address")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Undecodable or malformed email address"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    EmailPath(email): EmailPath,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.user_service.get_user_by_email(&email).await?;
    Ok(Json(ApiResponse::success(user)))
}
