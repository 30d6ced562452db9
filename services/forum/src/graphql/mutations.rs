use std::sync::Arc;

use async_graphql::{Context, Error, Object, Result};

use crate::auth::AuthService;
use crate::content::PostService;
use crate::graphql::types::{PostInput, RegisterInput, UserResponse};
use crate::models::Post;
use crate::session::SessionContext;

/// Authentication gate for session-protected operations. Aborts the whole
/// operation rather than returning a field error.
fn require_user(session: &SessionContext) -> Result<i32> {
    session
        .user_id()
        .ok_or_else(|| Error::new("not authenticated"))
}

/// GraphQL Mutation root
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Register a new account; logs it in on success
    async fn register(&self, ctx: &Context<'_>, options: RegisterInput) -> Result<UserResponse> {
        let auth = ctx.data::<AuthService>()?;
        let session = ctx.data::<Arc<SessionContext>>()?;
        Ok(auth.register(options, session).await?)
    }

    /// Log in with a username or email plus password
    async fn login(
        &self,
        ctx: &Context<'_>,
        username_or_email: String,
        password: String,
    ) -> Result<UserResponse> {
        let auth = ctx.data::<AuthService>()?;
        let session = ctx.data::<Arc<SessionContext>>()?;
        Ok(auth.login(&username_or_email, &password, session).await?)
    }

    /// Destroy the current session and clear the cookie
    async fn logout(&self, ctx: &Context<'_>) -> Result<bool> {
        let auth = ctx.data::<AuthService>()?;
        let session = ctx.data::<Arc<SessionContext>>()?;
        Ok(auth.logout(session).await)
    }

    /// Send a password-reset email; always reports success
    async fn forgot_password(&self, ctx: &Context<'_>, email: String) -> Result<bool> {
        let auth = ctx.data::<AuthService>()?;
        Ok(auth.forgot_password(&email).await?)
    }

    /// Redeem a reset token for a new password
    async fn change_password(
        &self,
        ctx: &Context<'_>,
        token: String,
        new_password: String,
    ) -> Result<UserResponse> {
        let auth = ctx.data::<AuthService>()?;
        Ok(auth.change_password(&token, &new_password).await?)
    }

    /// Administrative user removal; returns the deleted id or 0
    async fn delete_user(&self, ctx: &Context<'_>, id: i32) -> Result<i32> {
        let auth = ctx.data::<AuthService>()?;
        Ok(auth.delete_user(id).await?)
    }

    /// Create a post as the authenticated user
    async fn create_post(&self, ctx: &Context<'_>, input: PostInput) -> Result<Post> {
        let session = ctx.data::<Arc<SessionContext>>()?;
        let author_id = require_user(session)?;

        let content = ctx.data::<PostService>()?;
        Ok(content.create_post(input, author_id).await?)
    }

    /// Update a post's title; null when the post does not exist
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: i32,
        title: Option<String>,
    ) -> Result<Option<Post>> {
        let content = ctx.data::<PostService>()?;
        Ok(content.update_post(id, title).await?)
    }

    /// Delete a post by id; reports true regardless of a match
    async fn delete_post(&self, ctx: &Context<'_>, id: i32) -> Result<bool> {
        let content = ctx.data::<PostService>()?;
        Ok(content.delete_post(id).await?)
    }
}
