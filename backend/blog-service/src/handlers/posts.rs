/// Post handlers - HTTP endpoints for post operations
use crate::db::post_repo;
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub contents: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub contents: Option<String>,
}

/// A field counts as provided only when it is present and non-empty.
fn has_value(field: Option<&str>) -> bool {
    field.map_or(false, |value| !value.is_empty())
}

/// List every post
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let posts = post_repo::find_posts(&pool).await.map_err(|err| {
        tracing::error!("post listing failed: {}", err);
        AppError::Database("The posts information could not be retrieved.".into())
    })?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Create a new post
///
/// The response echoes only the submitted title and contents.
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let title = req.title.as_deref().filter(|value| !value.is_empty());
    let contents = req.contents.as_deref().filter(|value| !value.is_empty());

    let (Some(title), Some(contents)) = (title, contents) else {
        return Err(AppError::Validation(
            "Please provide title and contents for the post.".into(),
        ));
    };

    match post_repo::create_post(&pool, title, contents).await {
        Ok(post) => Ok(HttpResponse::Created().json(json!({
            "title": post.title,
            "contents": post.contents,
        }))),
        Err(err) => {
            tracing::error!("post creation failed: {}", err);
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "There was an error while saving the post to the database.",
                "err": err.to_string(),
            })))
        }
    }
}

/// Get a post by ID
///
/// A successful response carries the single-element collection the lookup
/// returns, not the bare record.
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let posts = post_repo::find_post_by_id(&pool, *post_id).await.map_err(|err| {
        tracing::error!(%post_id, "post lookup failed: {}", err);
        AppError::Database("The post information could not be retrieved.".into())
    })?;

    if posts.first().is_none() {
        return Err(AppError::NotFound(
            "The post with the specified ID does not exist.".into(),
        ));
    }

    Ok(HttpResponse::Ok().json(posts))
}

/// Update a post
///
/// The update runs before field validation, so a partial body still mutates
/// the stored row and then earns a 400.
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let updated = match post_repo::update_post(
        &pool,
        *post_id,
        req.title.as_deref(),
        req.contents.as_deref(),
    )
    .await
    {
        Ok(row) => row,
        Err(err) => {
            tracing::error!(%post_id, "post update failed: {}", err);
            return Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "err": err.to_string(),
            })));
        }
    };

    match updated {
        None => Err(AppError::NotFound(
            "The post with the specified ID does not exist.".into(),
        )),
        Some(post) if has_value(req.title.as_deref()) && has_value(req.contents.as_deref()) => {
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "updated": post,
            })))
        }
        Some(_) => Err(AppError::Validation(
            "Please provide title and contents for the post.".into(),
        )),
    }
}

/// Delete a post
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match post_repo::delete_post(&pool, *post_id).await {
        Ok(0) => Err(AppError::NotFound(
            "The post with the specified ID does not exist.".into(),
        )),
        Ok(_) => Ok(HttpResponse::NoContent().finish()),
        Err(err) => {
            tracing::error!(%post_id, "post removal failed: {}", err);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": "The post could not be removed",
            })))
        }
    }
}
