//! Domain entities persisted in PostgreSQL

pub mod post;
pub mod user;

pub use post::{NewPost, Post};
pub use user::{NewUser, User};
