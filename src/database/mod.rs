//! Markshelf database layer.
//!
//! Opens a `places.sqlite` snapshot read-only and pulls the raw hierarchy
//! rows the store resolves into bookmarks.
//!
//! # Usage
//!
//! ```no_run
//! use markshelf::database::Database;
//!
//! let db = Database::open_readonly("places.sqlite").expect("failed to open snapshot");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod queries;

pub use connection::Database;
pub use queries::{LeafRow, NodeRow, ROOT_SENTINEL};
