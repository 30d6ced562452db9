//! Redis-backed sessions and password-reset tokens
//!
//! Two key namespaces share the Redis pool: `sess:<id>` maps an opaque
//! session id to a user id, and `forgot-password:<token>` maps a single-use
//! reset token to a user id. Both expire through Redis TTLs.

use std::sync::Mutex;

use anyhow::Result;
use common::cache::RedisPool;
use tracing::info;
use uuid::Uuid;

const SESSION_PREFIX: &str = "sess:";
const FORGOT_PASSWORD_PREFIX: &str = "forgot-password:";

/// Ten years; sessions effectively live until explicit logout
const SESSION_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;
/// Reset tokens stay redeemable for three days
const RESET_TOKEN_TTL_SECONDS: u64 = 3 * 24 * 60 * 60;

/// Store for session records and password-reset tokens
#[derive(Clone)]
pub struct SessionStore {
    redis: RedisPool,
}

impl SessionStore {
    /// Create a new session store
    pub fn new(redis: RedisPool) -> Self {
        Self { redis }
    }

    /// Create a session bound to a user id. Returns the opaque session id
    /// that goes into the cookie.
    pub async fn create(&self, user_id: i32) -> Result<String> {
        let session_id = Uuid::new_v4().to_string();
        self.redis
            .set(
                &session_key(&session_id),
                &user_id.to_string(),
                Some(SESSION_TTL_SECONDS),
            )
            .await?;

        info!("Created session for user {user_id}");
        Ok(session_id)
    }

    /// Resolve a session id to the user it belongs to
    pub async fn user_id(&self, session_id: &str) -> Result<Option<i32>> {
        let value = self.redis.get(&session_key(session_id)).await?;
        Ok(value.and_then(|v| v.parse().ok()))
    }

    /// Destroy a session
    pub async fn destroy(&self, session_id: &str) -> Result<()> {
        info!("Destroying session");
        self.redis.delete(&session_key(session_id)).await
    }

    /// Store a single-use password-reset token for a user
    pub async fn store_reset_token(&self, token: &str, user_id: i32) -> Result<()> {
        self.redis
            .set(
                &reset_token_key(token),
                &user_id.to_string(),
                Some(RESET_TOKEN_TTL_SECONDS),
            )
            .await
    }

    /// Look up the user a reset token was issued for; None when the token
    /// was never issued, already consumed, or has expired
    pub async fn reset_token_user(&self, token: &str) -> Result<Option<i32>> {
        let value = self.redis.get(&reset_token_key(token)).await?;
        Ok(value.and_then(|v| v.parse().ok()))
    }

    /// Consume a reset token after a successful password change
    pub async fn delete_reset_token(&self, token: &str) -> Result<()> {
        self.redis.delete(&reset_token_key(token)).await
    }

    /// Check that the backing Redis instance is reachable
    pub async fn health_check(&self) -> Result<bool> {
        self.redis.health_check().await
    }
}

fn session_key(session_id: &str) -> String {
    format!("{SESSION_PREFIX}{session_id}")
}

fn reset_token_key(token: &str) -> String {
    format!("{FORGOT_PASSWORD_PREFIX}{token}")
}

/// Cookie change requested by a mutation, applied after GraphQL execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Issue the session cookie with this new session id
    Establish(String),
    /// Remove the session cookie
    Clear,
}

/// Per-request session state
///
/// Resolved from the cookie before GraphQL execution and passed explicitly
/// into every service call. Mutations record a [`SessionCommand`] here; the
/// HTTP handler applies it to the cookie jar once the operation finishes.
pub struct SessionContext {
    session_id: Option<String>,
    user_id: Option<i32>,
    command: Mutex<Option<SessionCommand>>,
}

impl SessionContext {
    /// A request carrying no session cookie
    pub fn anonymous() -> Self {
        Self {
            session_id: None,
            user_id: None,
            command: Mutex::new(None),
        }
    }

    /// Resolve the session carried by a cookie value. A cookie whose session
    /// record has expired or been destroyed yields no user id.
    pub async fn resolve(store: &SessionStore, session_id: &str) -> Result<Self> {
        let user_id = store.user_id(session_id).await?;
        Ok(Self {
            session_id: Some(session_id.to_string()),
            user_id,
            command: Mutex::new(None),
        })
    }

    /// The user id the current session is bound to, if any
    pub fn user_id(&self) -> Option<i32> {
        self.user_id
    }

    /// The session id from the cookie, if one was presented
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Record that a new session cookie should be issued with the response
    pub fn establish(&self, session_id: String) {
        *self.command.lock().expect("session command lock poisoned") =
            Some(SessionCommand::Establish(session_id));
    }

    /// Record that the session cookie should be cleared with the response
    pub fn clear(&self) {
        *self.command.lock().expect("session command lock poisoned") =
            Some(SessionCommand::Clear);
    }

    /// Take the pending cookie change, if any
    pub fn take_command(&self) -> Option<SessionCommand> {
        self.command
            .lock()
            .expect("session command lock poisoned")
            .take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_keys_are_namespaced() {
        assert_eq!(session_key("abc"), "sess:abc");
        assert_eq!(reset_token_key("abc"), "forgot-password:abc");
    }

    #[test]
    fn anonymous_context_has_no_user_or_session() {
        let ctx = SessionContext::anonymous();
        assert_eq!(ctx.user_id(), None);
        assert_eq!(ctx.session_id(), None);
        assert_eq!(ctx.take_command(), None);
    }

    #[test]
    fn commands_are_taken_once() {
        let ctx = SessionContext::anonymous();
        ctx.establish("sid".to_string());
        assert_eq!(
            ctx.take_command(),
            Some(SessionCommand::Establish("sid".to_string()))
        );
        assert_eq!(ctx.take_command(), None);
    }

    #[test]
    fn later_commands_replace_earlier_ones() {
        let ctx = SessionContext::anonymous();
        ctx.establish("sid".to_string());
        ctx.clear();
        assert_eq!(ctx.take_command(), Some(SessionCommand::Clear));
    }
}
