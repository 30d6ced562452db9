//! Forum backend: a GraphQL API over PostgreSQL with Redis cookie sessions
//!
//! The service exposes user registration/login/session auth, a
//! password-reset-by-email flow, and CRUD over posts. PostgreSQL holds the
//! user and post records; Redis holds the session records and single-use
//! reset tokens.

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod graphql;
pub mod mailer;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod state;
pub mod validation;
