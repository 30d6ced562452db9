//! HTTP routes: health check and the GraphQL endpoint

use std::sync::Arc;

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::session::{SessionCommand, SessionContext};
use crate::state::AppState;

/// Ten years, matching the session TTL in the store
const COOKIE_MAX_AGE: time::Duration = time::Duration::days(10 * 365);

/// Create the router for the forum service
pub fn create_router(state: AppState) -> anyhow::Result<Router> {
    let origin: HeaderValue = state.config.frontend_origin.parse()?;

    // Cookies only flow cross-origin when CORS is credentialed and pinned
    // to the frontend origin.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Ok(Router::new()
        .route("/health", get(health_check))
        .route("/graphql", post(graphql_handler))
        .route("/graphql/playground", get(graphql_playground))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Health check endpoint covering both stores
async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    common::database::health_check(&state.db_pool).await?;
    state
        .sessions
        .health_check()
        .await
        .map_err(ApiError::SessionStore)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "service": "forum",
    })))
}

/// GraphQL endpoint handler
///
/// Resolves the session cookie into a [`SessionContext`], executes the
/// operation, then applies whatever cookie change the mutation recorded.
async fn graphql_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<async_graphql::Request>,
) -> Result<impl IntoResponse, ApiError> {
    let session = match jar.get(&state.config.cookie_name) {
        Some(cookie) => SessionContext::resolve(&state.sessions, cookie.value())
            .await
            .map_err(|e| {
                error!("Failed to resolve session: {e}");
                ApiError::SessionStore(e)
            })?,
        None => SessionContext::anonymous(),
    };
    let session = Arc::new(session);

    let response = state.schema.execute(request.data(session.clone())).await;

    let jar = match session.take_command() {
        Some(SessionCommand::Establish(session_id)) => {
            jar.add(session_cookie(&state.config, session_id))
        }
        Some(SessionCommand::Clear) => jar.remove(expired_cookie(&state.config)),
        None => jar,
    };

    Ok((jar, Json(response)))
}

/// GraphQL Playground UI (development tool)
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

fn session_cookie(config: &AppConfig, session_id: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), session_id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.production)
        .max_age(COOKIE_MAX_AGE)
        .build()
}

fn expired_cookie(config: &AppConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), ""))
        .path("/")
        .build()
}
