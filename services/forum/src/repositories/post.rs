//! Post repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::models::{NewPost, Post};

/// Post repository
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new post; points start at the column default of 0
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        info!("Creating post for user {}", new_post.author_id);

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, points, author_id, created_at, updated_at
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(new_post.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Find a post by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, points, author_id, created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// List all posts
    pub async fn list(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, points, author_id, created_at, updated_at
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Update a post's title, bumping updated_at.
    /// Returns None when no post has this id.
    pub async fn update_title(&self, id: i32, title: &str) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, title, content, points, author_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Delete a post by id. Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
