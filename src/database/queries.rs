//! Raw row retrieval from the `moz_bookmarks` / `moz_places` tables.

use rusqlite::Connection;
use std::collections::HashMap;

/// `moz_bookmarks.type` value marking a bookmark leaf.
const TYPE_BOOKMARK: i64 = 1;

/// Parent-id value meaning "no parent; top of hierarchy".
pub const ROOT_SENTINEL: i64 = 0;

/// One row of the self-referential hierarchy table. Folders and leaves
/// alike appear here; the resolver only chases parent links.
#[derive(Debug, Clone)]
pub struct NodeRow {
    pub id: i64,
    pub title: Option<String>,
    pub parent: i64,
}

/// One bookmark leaf joined with its place URL.
#[derive(Debug, Clone)]
pub struct LeafRow {
    pub id: i64,
    pub title: Option<String>,
    pub url: String,
    pub parent: i64,
    /// Microsecond-epoch timestamp, NULL in older profiles.
    pub date_added_us: Option<i64>,
}

/// Reads a single node row into a struct.
fn row_to_node(row: &rusqlite::Row) -> rusqlite::Result<NodeRow> {
    Ok(NodeRow {
        id: row.get(0)?,
        title: row.get(1)?,
        parent: row.get(2)?,
    })
}

/// Reads a single leaf row into a struct.
fn row_to_leaf(row: &rusqlite::Row) -> rusqlite::Result<LeafRow> {
    Ok(LeafRow {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        parent: row.get(3)?,
        date_added_us: row.get(4)?,
    })
}

/// Loads the full hierarchy table keyed by node id.
pub fn fetch_nodes(conn: &Connection) -> Result<HashMap<i64, NodeRow>, rusqlite::Error> {
    let mut stmt = conn.prepare("SELECT id, title, parent FROM moz_bookmarks")?;
    let rows = stmt.query_map([], row_to_node)?;

    let mut nodes = HashMap::new();
    for row in rows {
        let node = row?;
        nodes.insert(node.id, node);
    }
    Ok(nodes)
}

/// Loads every bookmark leaf with its URL and timestamp.
pub fn fetch_leaves(conn: &Connection) -> Result<Vec<LeafRow>, rusqlite::Error> {
    let mut stmt = conn.prepare(
        "SELECT b.id, b.title, p.url, b.parent, b.dateAdded \
         FROM moz_bookmarks b JOIN moz_places p ON b.fk = p.id \
         WHERE b.type = ?1 AND p.url IS NOT NULL \
         ORDER BY b.id",
    )?;
    let rows = stmt.query_map([TYPE_BOOKMARK], row_to_leaf)?;

    let mut leaves = Vec::new();
    for row in rows {
        leaves.push(row?);
    }
    Ok(leaves)
}
