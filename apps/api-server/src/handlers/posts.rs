//! Post handlers.

use actix_web::{HttpRequest, HttpResponse, http::header, web};
use validator::Validate;

use postboard_core::DomainError;
use postboard_core::domain::PostFilter;
use postboard_shared::ErrorResponse;
use postboard_shared::dto::{ListPostsQuery, PostRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Route name of `/api/posts/{id}`, used to build `Location` headers.
pub const POST_RESOURCE: &str = "post";

/// GET /api/posts
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Matching posts ordered by name", body = Vec<PostResponse>),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = PostFilter::from_params(query.search.as_deref(), query.sort_order.as_deref());

    let posts = state.posts.list(filter).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "The post", body = PostResponse),
        (status = 404, description = "No post with this ID", body = ErrorResponse)
    )
)]
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .get(id)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    body.validate()?;

    let post = state.posts.create(body).await?;

    let location = req
        .url_for(POST_RESOURCE, [post.id.to_string()])
        .map_err(|e| AppError::Internal(format!("cannot build post location: {e}")))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.to_string()))
        .json(post))
}

/// PUT /api/posts/{id}
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post ID")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "No post with this ID", body = ErrorResponse)
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let body = body.into_inner();
    body.validate()?;

    let post = state
        .posts
        .update(id, body)
        .await?
        .ok_or_else(|| DomainError::post_not_found(id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "No post with this ID", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if !state.posts.delete(id).await? {
        return Err(DomainError::post_not_found(id).into());
    }

    Ok(HttpResponse::NoContent().finish())
}
