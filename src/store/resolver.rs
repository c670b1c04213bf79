//! Hierarchical path resolution.
//!
//! The snapshot stores its folder tree as a flat self-referential table, so
//! ancestor paths are recovered by chasing parent ids through an in-memory
//! node map. The walk is bounded: a parent chain longer than
//! [`MAX_TRAVERSAL_DEPTH`] means a cycle or corrupt reference and is
//! reported as a data-integrity failure rather than looping forever.

use std::collections::HashMap;

use crate::database::queries::{NodeRow, ROOT_SENTINEL};
use crate::types::errors::StoreError;

/// Upper bound on ancestor-chain length. Real profiles nest a handful of
/// levels deep; anything past this is corrupt data.
pub const MAX_TRAVERSAL_DEPTH: usize = 64;

/// Resolves the ordered ancestor-title sequence for a leaf, outermost first.
///
/// `parent` is the leaf's immediate parent id. Titles that are absent or
/// empty contribute nothing (the synthetic root in Firefox data has no
/// title, so it is naturally excluded). A dangling parent id ends the walk
/// with the titles collected so far.
///
/// # Errors
/// Returns [`StoreError::DataIntegrity`] when the walk exceeds
/// [`MAX_TRAVERSAL_DEPTH`].
pub fn resolve_path(
    nodes: &HashMap<i64, NodeRow>,
    parent: i64,
) -> Result<Vec<String>, StoreError> {
    let mut titles = Vec::new();
    let mut current = parent;
    let mut depth = 0;

    while current != ROOT_SENTINEL {
        depth += 1;
        if depth > MAX_TRAVERSAL_DEPTH {
            return Err(StoreError::DataIntegrity(format!(
                "ancestor chain exceeds {} levels at node {} (cycle or corrupt parent reference)",
                MAX_TRAVERSAL_DEPTH, current
            )));
        }

        let Some(node) = nodes.get(&current) else {
            // Dangling parent reference: keep what we have.
            break;
        };
        if let Some(title) = node.title.as_deref() {
            if !title.is_empty() {
                titles.push(title.to_string());
            }
        }
        current = node.parent;
    }

    titles.reverse();
    Ok(titles)
}
