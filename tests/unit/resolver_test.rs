//! Unit tests for the hierarchical path resolver.
//!
//! The resolver walks an in-memory node map from a leaf's parent up to the
//! root sentinel, collecting non-empty titles outermost-first. These tests
//! cover the walk itself; end-to-end behavior over a real snapshot lives in
//! the store tests.

use std::collections::HashMap;

use rstest::rstest;

use markshelf::database::queries::{NodeRow, ROOT_SENTINEL};
use markshelf::store::resolver::{resolve_path, MAX_TRAVERSAL_DEPTH};
use markshelf::types::errors::StoreError;

fn node_map(entries: &[(i64, Option<&str>, i64)]) -> HashMap<i64, NodeRow> {
    entries
        .iter()
        .map(|&(id, title, parent)| {
            (
                id,
                NodeRow {
                    id,
                    title: title.map(String::from),
                    parent,
                },
            )
        })
        .collect()
}

/// Three named levels below an untitled synthetic root resolve in
/// outermost-to-innermost order.
#[test]
fn deep_chain_resolves_outermost_first() {
    let nodes = node_map(&[
        (1, None, ROOT_SENTINEL),
        (2, Some("toolbar"), 1),
        (3, Some("ruby"), 2),
        (4, Some("gems"), 3),
    ]);

    let path = resolve_path(&nodes, 4).unwrap();
    assert_eq!(path, vec!["toolbar", "ruby", "gems"]);
}

/// A leaf whose parent id is the root sentinel has no ancestors.
#[test]
fn leaf_directly_under_sentinel_yields_empty_path() {
    let nodes = node_map(&[(1, None, ROOT_SENTINEL)]);
    assert!(resolve_path(&nodes, ROOT_SENTINEL).unwrap().is_empty());
}

/// A leaf directly under the untitled synthetic root also has no named
/// ancestors.
#[test]
fn leaf_under_untitled_root_yields_empty_path() {
    let nodes = node_map(&[(1, None, ROOT_SENTINEL)]);
    assert!(resolve_path(&nodes, 1).unwrap().is_empty());
}

/// Empty or absent titles are skipped entirely, not rendered as blank
/// segments.
#[rstest]
#[case(None)]
#[case(Some(""))]
fn untitled_intermediate_folders_are_skipped(#[case] middle_title: Option<&str>) {
    let nodes = node_map(&[
        (1, None, ROOT_SENTINEL),
        (2, Some("outer"), 1),
        (3, middle_title, 2),
        (4, Some("inner"), 3),
    ]);

    let path = resolve_path(&nodes, 4).unwrap();
    assert_eq!(path, vec!["outer", "inner"]);
}

/// A dangling parent reference ends the walk; titles collected so far are
/// returned rather than an error.
#[test]
fn dangling_parent_returns_partial_path() {
    let nodes = node_map(&[(2, Some("orphaned"), 999)]);
    let path = resolve_path(&nodes, 2).unwrap();
    assert_eq!(path, vec!["orphaned"]);
}

/// A node that is its own parent must surface as a data-integrity failure,
/// not an infinite loop.
#[test]
fn self_cycle_raises_data_integrity() {
    let nodes = node_map(&[(7, Some("loop"), 7)]);
    let err = resolve_path(&nodes, 7).unwrap_err();
    assert!(matches!(err, StoreError::DataIntegrity(_)));
}

/// A legitimate chain right at the depth bound still resolves.
#[test]
fn chain_at_depth_bound_resolves() {
    let mut entries: Vec<(i64, Option<String>, i64)> = Vec::new();
    // Node ids 1..=MAX depth, each parented on the previous, topmost at the sentinel.
    for i in 1..=MAX_TRAVERSAL_DEPTH as i64 {
        entries.push((i, Some(format!("f{}", i)), i - 1));
    }
    let nodes: HashMap<i64, NodeRow> = entries
        .into_iter()
        .map(|(id, title, parent)| (id, NodeRow { id, title, parent }))
        .collect();

    let path = resolve_path(&nodes, MAX_TRAVERSAL_DEPTH as i64).unwrap();
    assert_eq!(path.len(), MAX_TRAVERSAL_DEPTH);
    assert_eq!(path.first().map(String::as_str), Some("f1"));
}

/// One level past the bound is rejected.
#[test]
fn chain_past_depth_bound_raises_data_integrity() {
    let depth = MAX_TRAVERSAL_DEPTH as i64 + 1;
    let nodes: HashMap<i64, NodeRow> = (1..=depth)
        .map(|i| {
            (
                i,
                NodeRow {
                    id: i,
                    title: Some(format!("f{}", i)),
                    parent: i - 1,
                },
            )
        })
        .collect();

    let err = resolve_path(&nodes, depth).unwrap_err();
    assert!(matches!(err, StoreError::DataIntegrity(_)));
}
