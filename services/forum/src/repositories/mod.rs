//! Data access over the PostgreSQL pool
//!
//! One repository per entity, each exposing find-by-id,
//! find-by-unique-field, insert, update-by-id, and delete-by-id.

pub mod post;
pub mod user;

pub use post::PostRepository;
pub use user::UserRepository;
