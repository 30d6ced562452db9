//! Shared infrastructure for the forum backend
//!
//! This crate provides the pieces both stores are built on: PostgreSQL
//! connection pooling, the Redis key-value pool used for sessions and
//! reset tokens, and the shared database error types.

pub mod cache;
pub mod database;
pub mod error;
