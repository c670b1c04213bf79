//! Bookmark store: materializes the snapshot into a cached, queryable
//! collection of [`Bookmark`](crate::types::Bookmark)s.

pub mod bookmarks;
pub mod resolver;

pub use bookmarks::{BookmarkStore, BookmarkStoreTrait};
pub use resolver::{resolve_path, MAX_TRAVERSAL_DEPTH};
