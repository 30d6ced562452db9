use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::auth::AuthService;
use crate::content::PostService;
use crate::models::{Post, User};
use crate::session::SessionContext;

/// GraphQL Query root
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All posts
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let content = ctx.data::<PostService>()?;
        Ok(content.posts().await?)
    }

    /// A single post by id
    async fn post(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Post>> {
        let content = ctx.data::<PostService>()?;
        Ok(content.post(id).await?)
    }

    /// The account bound to the current session
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let auth = ctx.data::<AuthService>()?;
        let session = ctx.data::<Arc<SessionContext>>()?;
        Ok(auth.me(session).await?)
    }

    /// All registered users
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let auth = ctx.data::<AuthService>()?;
        Ok(auth.users().await?)
    }
}
