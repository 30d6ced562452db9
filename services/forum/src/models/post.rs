//! Post entity and related payloads

use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Post entity, owned by exactly one user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, SimpleObject)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    /// Integer score, starts at 0
    pub points: i32,
    pub author_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: i32,
}
