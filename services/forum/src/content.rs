//! Post CRUD over the content store

use anyhow::Result;

use crate::graphql::types::PostInput;
use crate::models::{NewPost, Post};
use crate::repositories::PostRepository;

/// Post operations. The authentication gate for `create_post` runs at the
/// GraphQL layer; this service receives the already-resolved author id.
#[derive(Clone)]
pub struct PostService {
    posts: PostRepository,
}

impl PostService {
    /// Create a new post service
    pub fn new(posts: PostRepository) -> Self {
        Self { posts }
    }

    /// All posts, unfiltered and unpaginated
    pub async fn posts(&self) -> Result<Vec<Post>> {
        self.posts.list().await
    }

    /// A single post by primary key
    pub async fn post(&self, id: i32) -> Result<Option<Post>> {
        self.posts.find_by_id(id).await
    }

    /// Create a post on behalf of the authenticated user
    pub async fn create_post(&self, input: PostInput, author_id: i32) -> Result<Post> {
        self.posts
            .create(&NewPost {
                title: input.title,
                content: input.content,
                author_id,
            })
            .await
    }

    /// Update a post's title. Returns None when the post does not exist.
    /// No ownership check: any caller may update any post.
    pub async fn update_post(&self, id: i32, title: Option<String>) -> Result<Option<Post>> {
        match title {
            Some(title) => self.posts.update_title(id, &title).await,
            None => self.posts.find_by_id(id).await,
        }
    }

    /// Delete a post by id. Reports true whether or not a row matched.
    pub async fn delete_post(&self, id: i32) -> Result<bool> {
        self.posts.delete(id).await?;
        Ok(true)
    }
}
