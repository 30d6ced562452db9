//! Registration input validation

use crate::graphql::types::{FieldError, RegisterInput};

/// Check registration input against the field rules.
///
/// Rules are checked in order and only the first failing one is returned:
/// the email must contain `@`, the username must be longer than two
/// characters and must not contain `@`, and the password must be longer
/// than five characters.
pub fn validate_register(options: &RegisterInput) -> Option<Vec<FieldError>> {
    if !options.email.contains('@') {
        return Some(vec![FieldError::new(
            "email",
            "The email address is invalid.",
        )]);
    }

    if options.username.len() <= 2 {
        return Some(vec![FieldError::new(
            "username",
            "The username must be at least three characters long.",
        )]);
    }

    if options.username.contains('@') {
        return Some(vec![FieldError::new("username", "The username is invalid.")]);
    }

    if options.password.len() <= 5 {
        return Some(vec![FieldError::new(
            "password",
            "The password must be at least six characters long.",
        )]);
    }

    None
}
