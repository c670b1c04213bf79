//! Unit tests for the store error taxonomy.
//!
//! Verifies `Display` formatting and `std::error::Error` compatibility so
//! callers can surface failures without matching on variants.

use std::error::Error;
use std::path::PathBuf;

use markshelf::types::errors::StoreError;

#[test]
fn source_not_found_names_the_path() {
    let err = StoreError::SourceNotFound(PathBuf::from("/tmp/missing/places.sqlite"));
    let msg = err.to_string();
    assert!(msg.contains("not found"));
    assert!(msg.contains("/tmp/missing/places.sqlite"));
}

#[test]
fn database_error_carries_the_message() {
    let err = StoreError::DatabaseError("no such table: moz_bookmarks".to_string());
    assert_eq!(
        err.to_string(),
        "Bookmark database error: no such table: moz_bookmarks"
    );
}

#[test]
fn data_integrity_carries_the_message() {
    let err = StoreError::DataIntegrity("ancestor chain exceeds 64 levels at node 7".to_string());
    let msg = err.to_string();
    assert!(msg.contains("integrity"));
    assert!(msg.contains("node 7"));
}

#[test]
fn store_error_is_a_std_error() {
    let err: Box<dyn Error> = Box::new(StoreError::DatabaseError("boom".to_string()));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn rusqlite_errors_convert_to_database_error() {
    let err: StoreError = rusqlite::Error::InvalidQuery.into();
    assert!(matches!(err, StoreError::DatabaseError(_)));
}
