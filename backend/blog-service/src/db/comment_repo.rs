use crate::models::Comment;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new comment on a post
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    text: Option<&str>,
) -> Result<Comment, sqlx::Error> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (post_id, text)
        VALUES ($1, $2)
        RETURNING id, post_id, text, created_at
        "#,
    )
    .bind(post_id)
    .bind(text)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Get all comments for a post, oldest first
pub async fn find_comments_by_post(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, text, created_at
        FROM comments
        WHERE post_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}
