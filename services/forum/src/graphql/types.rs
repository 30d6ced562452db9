//! Shared GraphQL input and response types

use async_graphql::{InputObject, SimpleObject};

use crate::models::User;

/// A validation or business-rule failure attributed to a named input field
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct FieldError {
    /// The input field the failure refers to
    pub field: String,

    /// Human-readable description of the failure
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Envelope returned by the account mutations: either field errors or a user
#[derive(Debug, SimpleObject)]
pub struct UserResponse {
    /// Field-level errors, absent on success
    pub errors: Option<Vec<FieldError>>,

    /// The affected user, absent on failure
    pub user: Option<User>,
}

impl UserResponse {
    /// A successful response carrying the user
    pub fn from_user(user: User) -> Self {
        Self {
            errors: None,
            user: Some(user),
        }
    }

    /// A failed response carrying a single field error
    pub fn from_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: Some(vec![FieldError::new(field, message)]),
            user: None,
        }
    }

    /// A failed response carrying the given field errors
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            errors: Some(errors),
            user: None,
        }
    }
}

/// Registration options
#[derive(Debug, Clone, InputObject)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Input for creating a post
#[derive(Debug, Clone, InputObject)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_error_carries_exactly_one_field_error() {
        let response = UserResponse::from_error("token", "The token has expired.");
        let errors = response.errors.expect("expected errors");
        assert_eq!(errors, vec![FieldError::new("token", "The token has expired.")]);
        assert!(response.user.is_none());
    }
}
