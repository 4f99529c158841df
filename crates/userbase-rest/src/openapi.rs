//! OpenAPI documentation configuration.

use userbase_core::{ErrorResponse, User, UserId};
use userbase_service::{CreateUserRequest, StatusResponse};
use utoipa::OpenApi;

use crate::controllers::HealthResponse;

/// OpenAPI documentation for the Userbase API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userbase API",
        version = "0.1.0",
        description = "CRUD service for user records",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::search_users,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::delete_user,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserId,
            User,
            ErrorResponse,
            CreateUserRequest,
            StatusResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User record endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
