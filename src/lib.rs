//! Markshelf — a terminal pager for Firefox bookmark snapshots.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod database;
pub mod pager;
pub mod store;
pub mod types;
