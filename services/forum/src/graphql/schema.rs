use async_graphql::{EmptySubscription, Schema};

use crate::auth::AuthService;
use crate::content::PostService;

use super::mutations::MutationRoot;
use super::queries::QueryRoot;

/// GraphQL Schema type
pub type ForumSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with the services wired into its context.
/// The per-request [`crate::session::SessionContext`] is injected by the
/// HTTP handler.
pub fn build_schema(auth: AuthService, content: PostService) -> ForumSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(auth)
        .data(content)
        .finish()
}
