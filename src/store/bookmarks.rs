//! Bookmark Store for Markshelf.
//!
//! Implements `BookmarkStoreTrait` — one-time materialization of the
//! snapshot into an ordered `Bookmark` collection, plus search and folder
//! filtering over the cached result.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::DateTime;

use crate::database::connection::Database;
use crate::database::queries;
use crate::store::resolver::resolve_path;
use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// Trait defining read operations over a materialized bookmark collection.
pub trait BookmarkStoreTrait {
    /// Full collection, newest `date_added` first (absent timestamps last).
    fn bookmarks(&self) -> Result<&[Bookmark], StoreError>;
    fn count(&self) -> Result<usize, StoreError>;
    /// Case-insensitive substring match over title, URL, and full path.
    fn search(&self, term: &str) -> Result<Vec<Bookmark>, StoreError>;
    /// Sorted, de-duplicated immediate-folder names.
    fn folders(&self) -> Result<Vec<String>, StoreError>;
    /// Bookmarks whose immediate folder equals `name` or whose path
    /// contains `name` at any depth.
    fn by_folder(&self, name: &str) -> Result<Vec<Bookmark>, StoreError>;
}

/// Bookmark store backed by a read-only snapshot file.
///
/// The snapshot is read exactly once, on the first call to `bookmarks()`;
/// the resolved collection is cached for the lifetime of the store. There
/// is no refresh — construct a new store for a new snapshot.
#[derive(Debug)]
pub struct BookmarkStore {
    source: PathBuf,
    cache: OnceLock<Vec<Bookmark>>,
    // Serializes first materialization so concurrent first readers do not
    // each run their own resolution pass.
    materialize_gate: Mutex<()>,
}

impl BookmarkStore {
    /// Creates a store over an existing snapshot. Validates that the file
    /// is present and readable without reading any data.
    ///
    /// # Errors
    /// Returns [`StoreError::SourceNotFound`] if the path does not point to
    /// a readable file.
    pub fn new<P: AsRef<Path>>(source: P) -> Result<Self, StoreError> {
        let source = source.as_ref().to_path_buf();
        if !source.is_file() || std::fs::File::open(&source).is_err() {
            return Err(StoreError::SourceNotFound(source));
        }
        Ok(Self {
            source,
            cache: OnceLock::new(),
            materialize_gate: Mutex::new(()),
        })
    }

    /// Path of the snapshot this store reads from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Reads the snapshot and resolves every leaf into a `Bookmark`.
    fn materialize(&self) -> Result<Vec<Bookmark>, StoreError> {
        let db = Database::open_readonly(&self.source)?;
        let conn = db.connection();
        let nodes = queries::fetch_nodes(conn)?;
        let leaves = queries::fetch_leaves(conn)?;

        let mut collection = Vec::with_capacity(leaves.len());
        for leaf in leaves {
            let path = resolve_path(&nodes, leaf.parent)?;
            let date_added = leaf
                .date_added_us
                .and_then(|us| DateTime::from_timestamp(us / 1_000_000, 0));
            collection.push(Bookmark::new(leaf.id, leaf.title, leaf.url, path, date_added));
        }

        collection.sort_by(|a, b| match (&a.date_added, &b.date_added) {
            (Some(x), Some(y)) => y.cmp(x).then_with(|| a.id.cmp(&b.id)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        });
        Ok(collection)
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    fn bookmarks(&self) -> Result<&[Bookmark], StoreError> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }

        let _gate = self
            .materialize_gate
            .lock()
            .map_err(|_| StoreError::DatabaseError("materialization gate poisoned".into()))?;
        // Another session may have populated the cache while we waited.
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }

        let collection = self.materialize()?;
        Ok(self.cache.get_or_init(|| collection))
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.bookmarks()?.len())
    }

    fn search(&self, term: &str) -> Result<Vec<Bookmark>, StoreError> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let matches = self
            .bookmarks()?
            .iter()
            .filter(|bm| {
                bm.title
                    .as_deref()
                    .is_some_and(|t| t.to_lowercase().contains(&needle))
                    || bm.url.to_lowercase().contains(&needle)
                    || bm.full_path().to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        Ok(matches)
    }

    fn folders(&self) -> Result<Vec<String>, StoreError> {
        let names: BTreeSet<String> = self
            .bookmarks()?
            .iter()
            .filter_map(|bm| bm.folder.clone())
            .collect();
        Ok(names.into_iter().collect())
    }

    fn by_folder(&self, name: &str) -> Result<Vec<Bookmark>, StoreError> {
        let matches = self
            .bookmarks()?
            .iter()
            .filter(|bm| {
                bm.folder.as_deref() == Some(name) || bm.path.iter().any(|seg| seg == name)
            })
            .cloned()
            .collect();
        Ok(matches)
    }
}
