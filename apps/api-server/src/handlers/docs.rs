//! OpenAPI document.

use actix_web::HttpResponse;
use utoipa::OpenApi;

use postboard_shared::ErrorResponse;
use postboard_shared::dto::{PostRequest, PostResponse};

use super::health::{self, HealthResponse};
use super::posts;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Post Management API",
        description = "API for managing posts with CRUD operations"
    ),
    paths(
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        posts::update_post,
        posts::delete_post,
        health::health_check,
    ),
    components(schemas(PostRequest, PostResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "posts", description = "Post management"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
