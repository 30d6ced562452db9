//! Application state shared across handlers

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::graphql::ForumSchema;
use crate::session::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub schema: ForumSchema,
    pub sessions: SessionStore,
    pub config: AppConfig,
}
