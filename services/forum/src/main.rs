use std::sync::Arc;

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use common::error::DatabaseError;
use forum::auth::AuthService;
use forum::config::AppConfig;
use forum::content::PostService;
use forum::graphql;
use forum::mailer::LogMailer;
use forum::repositories::{PostRepository, UserRepository};
use forum::routes;
use forum::session::SessionStore;
use forum::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting forum service");

    let app_config = AppConfig::from_env();

    // Initialize database connection pool
    let db_config = common::database::DatabaseConfig::from_env()?;
    let pool = common::database::init_pool(&db_config).await?;

    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

    // Initialize Redis connection pool
    let redis_config = common::cache::RedisConfig::from_env()?;
    let redis_pool = common::cache::RedisPool::new(&redis_config).await?;

    let sessions = SessionStore::new(redis_pool);
    let users = UserRepository::new(pool.clone());
    let posts = PostRepository::new(pool.clone());

    let auth = AuthService::new(
        users,
        sessions.clone(),
        Arc::new(LogMailer),
        app_config.frontend_origin.clone(),
    );
    let content = PostService::new(posts);

    let schema = graphql::build_schema(auth, content);

    let state = AppState {
        db_pool: pool,
        schema,
        sessions,
        config: app_config.clone(),
    };

    // Start the web server
    let app = routes::create_router(state)?;

    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr).await?;
    info!("Forum service listening on {}", app_config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
