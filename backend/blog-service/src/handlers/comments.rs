/// Comment handlers - HTTP endpoints for comment operations
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Request body for creating a comment
///
/// `text` is optional: a body without the field is accepted and stored with
/// NULL text. Only the literal empty string is rejected.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: Option<String>,
}

/// Create a comment under a post
///
/// The parent post is checked first; the comment row is then written before
/// the text validation runs, so an empty comment is stored and then rejected.
pub async fn create_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let posts = post_repo::find_post_by_id(&pool, *post_id).await.map_err(|err| {
        tracing::error!(%post_id, "post lookup failed: {}", err);
        AppError::Database("There was an error while saving the comment to the database.".into())
    })?;

    if posts.first().is_none() {
        return Err(AppError::NotFound(
            "The post with the specified ID does not exist.".into(),
        ));
    }

    let comment = comment_repo::create_comment(&pool, *post_id, req.text.as_deref())
        .await
        .map_err(|err| {
            tracing::error!(%post_id, "comment creation failed: {}", err);
            AppError::Database(
                "There was an error while saving the comment to the database.".into(),
            )
        })?;

    if req.text.as_deref() == Some("") {
        return Err(AppError::Validation(
            "Please provide text for the comment.".into(),
        ));
    }

    Ok(HttpResponse::Created().json(comment))
}

/// List the comments under a post
///
/// An empty result yields a 404: a post with no comments is indistinguishable
/// from a missing post on this endpoint.
pub async fn get_post_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let comments = comment_repo::find_comments_by_post(&pool, *post_id)
        .await
        .map_err(|err| {
            tracing::error!(%post_id, "comment listing failed: {}", err);
            AppError::Database("The comments information could not be retrieved.".into())
        })?;

    if comments.is_empty() {
        return Err(AppError::NotFound(
            "The post with the specified ID does not exist.".into(),
        ));
    }

    Ok(HttpResponse::Ok().json(comments))
}
