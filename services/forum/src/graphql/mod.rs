//! GraphQL schema: query/mutation roots and shared types

pub mod mutations;
pub mod queries;
pub mod schema;
pub mod types;

pub use schema::{ForumSchema, build_schema};
