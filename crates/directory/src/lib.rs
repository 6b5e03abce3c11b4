//! In-memory user directory.
//!
//! Owns the user records and the id counter. Pure in-process state: no IO,
//! no HTTP. The adapter in `userdir-api` shares one `UserDirectory` across
//! all requests.

pub mod directory;
pub mod user;

pub use directory::UserDirectory;
pub use user::{Attributes, NewUser, User};
