//! Blog handlers.
//!
//! Each handler is a single linear pipeline: parse input, validate, make one
//! repository call, shape the result into the envelope.

use std::collections::HashMap;

use actix_web::{HttpResponse, web};

use blog_shared::ApiResponse;
use blog_shared::dto::{BlogResponse, CreateBlogRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::query;
use crate::state::AppState;

/// GET /blogs?page=&limit=
pub async fn list(
    state: web::Data<AppState>,
    params: web::Query<HashMap<String, String>>,
) -> AppResult<HttpResponse> {
    let page = query::int_param(&params, "page", 1);
    let limit = query::int_param(&params, "limit", 10);

    if page < 1 || limit < 1 || limit > 100 {
        return Err(AppError::BadRequest(
            "Invalid pagination parameters".to_string(),
        ));
    }

    let offset = (page - 1) * limit;

    let blogs = state
        .blogs
        .list(limit as u64, offset as u64)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Failed to list blogs");
            AppError::Internal("Failed to fetch posts".to_string())
        })?;

    let payload: Vec<BlogResponse> = blogs.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::new(payload)))
}

/// POST /blogs
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    if req.slug.is_empty() {
        return Err(AppError::BadRequest("Slug is required".to_string()));
    }

    state.blogs.create(req.into_blog()).await.map_err(|err| {
        tracing::error!(error = %err, "Failed to create blog");
        AppError::Internal("Failed to create post".to_string())
    })?;

    Ok(HttpResponse::Created().json(ApiResponse::new("Post created successfully")))
}

/// GET /blogs/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    if slug.is_empty() {
        return Err(AppError::BadRequest("Missing slug parameter".to_string()));
    }

    let blog = state
        .blogs
        .find_by_slug(&slug)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, slug = %slug, "Failed to get blog");
            AppError::Internal("Failed to get blog".to_string())
        })?
        .ok_or_else(|| AppError::NotFound("Blog not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(BlogResponse::from(blog))))
}
