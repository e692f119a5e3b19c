use axum::{body::Bytes, extract::State};
use std::sync::Arc;

use crate::error::AppError;
use crate::response::AppResponse;
use crate::services::user_service::UserService;
use avatar_api::{ErrorResponse, UserCreate, UserResponse};

/// POST /users/
/// The body is read as JSON whatever the Content-Type header says
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = UserCreate,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
        (status = 422, description = "Body is not JSON, or a field is missing or mistyped", body = ErrorResponse),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    body: Bytes,
) -> Result<AppResponse<UserResponse>, AppError> {
    let payload: UserCreate = serde_json::from_slice(&body)?;
    let user = service.create_user(payload).await?;
    Ok(AppResponse::ok(user))
}

/// GET /users/
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "All users, unordered", body = Vec<UserResponse>),
        (status = 500, description = "Database unavailable", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<AppResponse<Vec<UserResponse>>, AppError> {
    let users = service.list_users().await?;
    Ok(AppResponse::ok(users))
}
