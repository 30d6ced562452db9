//! Registration, login, and password-reset flows

use std::sync::Arc;

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use tracing::{error, info};
use uuid::Uuid;

use crate::graphql::types::{RegisterInput, UserResponse};
use crate::mailer::Mailer;
use crate::models::{NewUser, User};
use crate::repositories::UserRepository;
use crate::session::{SessionContext, SessionStore};
use crate::validation::validate_register;

/// Hash a password with a fresh salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(hash)
}

/// Verify a password against a stored hash
pub fn verify_password(hash: &str, password: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Account operations over the credential and session stores
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: SessionStore,
    mailer: Arc<dyn Mailer>,
    frontend_origin: String,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(
        users: UserRepository,
        sessions: SessionStore,
        mailer: Arc<dyn Mailer>,
        frontend_origin: String,
    ) -> Self {
        Self {
            users,
            sessions,
            mailer,
            frontend_origin,
        }
    }

    /// Register a new account and log it in
    pub async fn register(
        &self,
        options: RegisterInput,
        session: &SessionContext,
    ) -> Result<UserResponse> {
        let username = options.username.to_lowercase();
        let email = options.email.to_lowercase();

        if self.users.find_by_username(&username).await?.is_some() {
            return Ok(UserResponse::from_error(
                "usernameOrEmail",
                "The username already exists.",
            ));
        }

        if let Some(errors) = validate_register(&options) {
            return Ok(UserResponse::from_errors(errors));
        }

        let password_hash = hash_password(&options.password)?;
        let new_user = NewUser {
            username,
            email,
            password_hash,
        };

        // The existence check above races with concurrent registrations;
        // the unique constraints catch whatever slips through.
        let user = match self.users.create(&new_user).await {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to persist user: {e}");
                return Ok(UserResponse::from_error("db", e.to_string()));
            }
        };

        let session_id = self.sessions.create(user.id).await?;
        session.establish(session_id);

        info!("Registered user {}", user.username);
        Ok(UserResponse::from_user(user))
    }

    /// Log in with a username or email plus password
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
        session: &SessionContext,
    ) -> Result<UserResponse> {
        let identifier = username_or_email.to_lowercase();

        let user = if identifier.contains('@') {
            self.users.find_by_email(&identifier).await?
        } else {
            self.users.find_by_username(&identifier).await?
        };

        let Some(user) = user else {
            return Ok(UserResponse::from_error(
                "usernameOrEmail",
                "That user does not exist.",
            ));
        };

        if !verify_password(&user.password_hash, password)? {
            return Ok(UserResponse::from_error(
                "password",
                "The password is incorrect.",
            ));
        }

        let session_id = self.sessions.create(user.id).await?;
        session.establish(session_id);

        Ok(UserResponse::from_user(user))
    }

    /// Destroy the current session. The cookie is cleared even when the
    /// session store rejects the delete.
    pub async fn logout(&self, session: &SessionContext) -> bool {
        session.clear();

        match session.session_id() {
            Some(session_id) => match self.sessions.destroy(session_id).await {
                Ok(()) => true,
                Err(e) => {
                    error!("Failed to destroy session: {e}");
                    false
                }
            },
            None => true,
        }
    }

    /// Issue a password-reset token and email the reset link.
    ///
    /// Always reports success so callers cannot probe which email addresses
    /// have accounts.
    pub async fn forgot_password(&self, email: &str) -> Result<bool> {
        let Some(user) = self.users.find_by_email(&email.to_lowercase()).await? else {
            return Ok(true);
        };

        let token = Uuid::new_v4().to_string();
        self.sessions.store_reset_token(&token, user.id).await?;

        let link = format!("{}/change-password/{}", self.frontend_origin, token);
        self.mailer
            .send(&user.email, &format!("<a href=\"{link}\">change password</a>"))
            .await?;

        Ok(true)
    }

    /// Redeem a reset token for a new password.
    ///
    /// The token is deleted on success (single use) and the caller is not
    /// logged in automatically.
    pub async fn change_password(&self, token: &str, new_password: &str) -> Result<UserResponse> {
        if new_password.len() <= 5 {
            return Ok(UserResponse::from_error(
                "newPassword",
                "The password must be at least six characters long.",
            ));
        }

        let Some(user_id) = self.sessions.reset_token_user(token).await? else {
            return Ok(UserResponse::from_error("token", "The token has expired."));
        };

        let password_hash = hash_password(new_password)?;
        let Some(user) = self.users.update_password(user_id, &password_hash).await? else {
            return Ok(UserResponse::from_error("token", "User no longer exists."));
        };

        self.sessions.delete_reset_token(token).await?;

        Ok(UserResponse::from_user(user))
    }

    /// The account bound to the current session, if any
    pub async fn me(&self, session: &SessionContext) -> Result<Option<User>> {
        match session.user_id() {
            Some(id) => self.users.find_by_id(id).await,
            None => Ok(None),
        }
    }

    /// List all registered users
    pub async fn users(&self) -> Result<Vec<User>> {
        self.users.list().await
    }

    /// Administrative removal of a user. Returns the deleted id, or 0 when
    /// nothing matched.
    pub async fn delete_user(&self, id: i32) -> Result<i32> {
        if self.users.delete(id).await? {
            Ok(id)
        } else {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_roundtrip() {
        let hash = hash_password("hunter2hunter2").expect("hashing failed");
        assert!(verify_password(&hash, "hunter2hunter2").expect("verify failed"));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("correct horse").expect("hashing failed");
        assert!(!verify_password(&hash, "battery staple").expect("verify failed"));
    }

    #[test]
    fn hash_is_salted_and_never_plaintext() {
        let first = hash_password("secret").expect("hashing failed");
        let second = hash_password("secret").expect("hashing failed");
        assert_ne!(first, second);
        assert!(!first.contains("secret"));
        assert!(first.starts_with("$argon2"));
    }

    #[test]
    fn garbage_hash_is_an_error_not_a_mismatch() {
        assert!(verify_password("not a phc string", "secret").is_err());
    }
}
