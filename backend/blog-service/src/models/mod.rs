/// Data models for blog-service
///
/// This module defines structures for:
/// - Post: Blog posts with a title and contents
/// - Comment: Comments attached to a post
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post database entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub contents: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment database entity
///
/// `text` is nullable: a comment posted without a text field is stored with
/// NULL text.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
}
