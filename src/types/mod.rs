// Markshelf shared type definitions

pub mod bookmark;
pub mod errors;

pub use bookmark::Bookmark;
pub use errors::StoreError;
