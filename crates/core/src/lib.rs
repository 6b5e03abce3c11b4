//! `userdir-core` — identifiers and the error model shared by the directory
//! and the HTTP adapter.
//!
//! No IO, no locking, no HTTP here.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::UserId;
