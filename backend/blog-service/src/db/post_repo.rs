use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch every post, oldest first
pub async fn find_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, contents, created_at, updated_at
        FROM posts
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a post by ID
///
/// The lookup keeps the collection shape of the storage contract: the result
/// holds zero or one element and callers inspect `.first()`.
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, contents, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Create a new post
/// Returns the created post
pub async fn create_post(pool: &PgPool, title: &str, contents: &str) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, contents)
        VALUES ($1, $2)
        RETURNING id, title, contents, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(contents)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Update a post's title and/or contents
///
/// Absent fields keep their stored value. Returns the modified row, or `None`
/// if no post matched the ID.
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    title: Option<&str>,
    contents: Option<&str>,
) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = COALESCE($2, title),
            contents = COALESCE($3, contents),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, title, contents, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(title)
    .bind(contents)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Delete a post
/// Returns the number of rows removed
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
