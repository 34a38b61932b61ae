//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use domain::{CreateUserRequest, UpdateUserRequest, User};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service",
        version = "0.1.0",
        description = "CRUD API for user records backed by PostgreSQL"
    ),
    paths(
        health_handler::health,
        health_handler::ping,
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::get_user_by_email,
    ),
    components(schemas(
        User,
        CreateUserRequest,
        UpdateUserRequest,
        health_handler::HealthResponse,
        health_handler::PingResponse,
    )),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Health", description = "Liveness and readiness checks")
    )
)]
pub struct ApiDoc;
