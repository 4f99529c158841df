//! User record controller.

use crate::{
    responses::{ok, success, ApiResult, AppError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;
use userbase_core::{User, UserId};
use userbase_service::{CreateUserRequest, StatusResponse};
use utoipa::IntoParams;

/// Query string of the search endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring to look for in user names.
    pub search: Option<String>,
}

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/search", get(search_users))
        .route("/:id", get(get_user).delete(delete_user))
}

/// List all live users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Live users", body = [User]),
        (status = 500, description = "Store failure", body = userbase_core::ErrorResponse)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    debug!("List users request");

    let users = state.user_service.list_users().await?;
    ok(users)
}

/// Create a new user.
///
/// The body is read leniently: anything that does not parse as a user
/// payload is treated as an empty one and rejected as incomplete.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = StatusResponse),
        (status = 400, description = "Required field missing", body = userbase_core::ErrorResponse),
        (status = 500, description = "Store failure", body = userbase_core::ErrorResponse)
    )
)]
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> ApiResult<StatusResponse> {
    debug!("Create user request ({} bytes)", body.len());

    let request = CreateUserRequest::from_lenient_json(&body);
    state.user_service.create_user(request).await?;
    success()
}

/// Search live users by name substring.
#[utoipa::path(
    get,
    path = "/users/search",
    tag = "users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users", body = [User]),
        (status = 400, description = "Empty or missing keyword", body = userbase_core::ErrorResponse),
        (status = 500, description = "Store failure", body = userbase_core::ErrorResponse)
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Vec<User>> {
    let keyword = query.search.unwrap_or_default();
    debug!("Search users request: {:?}", keyword);

    let users = state.user_service.search_users(&keyword).await?;
    ok(users)
}

/// Get a live user by ID.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Malformed id", body = userbase_core::ErrorResponse),
        (status = 500, description = "Not found or store failure", body = userbase_core::ErrorResponse)
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<User> {
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    ok(user)
}

/// Soft-delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted, or nothing to delete", body = StatusResponse),
        (status = 400, description = "Malformed id", body = userbase_core::ErrorResponse),
        (status = 500, description = "Store failure", body = userbase_core::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusResponse> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    state.user_service.delete_user(user_id).await?;
    success()
}

/// Parses a user ID from a path segment.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id).map_err(AppError)
}
