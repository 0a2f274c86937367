//! Signed-in user and linked member for the library client.
//!
//! A [`SessionContext`] holds the current [`Session`] and writes every
//! change through to a [`SessionStore`]. [`FileSessionStore`] keeps the
//! session in a versioned JSON file between runs; [`MemoryStore`] keeps it
//! in memory.

pub mod context;
pub mod error;
pub mod file;
pub mod session;
pub mod store;

pub use context::SessionContext;
pub use error::{Result, SessionError};
pub use file::{FileSessionStore, SESSION_FILE_NAME, SESSION_FILE_VERSION};
pub use session::Session;
pub use store::{MemoryStore, SessionStore};
