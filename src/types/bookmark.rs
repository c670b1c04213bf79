use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator used when joining ancestor folder titles into a display path.
pub const PATH_SEPARATOR: &str = " > ";

/// Placeholder shown for bookmarks whose title is absent.
pub const UNTITLED: &str = "(untitled)";

/// A single bookmark with its resolved ancestor-folder path.
///
/// Instances are created by the store's materialization pass and never
/// mutated afterwards. Equality and hashing are field-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: Option<String>,
    pub url: String,
    /// Immediate containing folder, equal to the last element of `path`
    /// whenever `path` is non-empty.
    pub folder: Option<String>,
    /// Ancestor folder titles, outermost first, excluding the leaf itself.
    /// Empty when the bookmark has no named ancestors.
    pub path: Vec<String>,
    pub date_added: Option<DateTime<Utc>>,
}

impl Bookmark {
    /// Creates a bookmark from resolved data. `folder` is derived from the
    /// last path segment rather than stored independently.
    pub fn new(
        id: i64,
        title: Option<String>,
        url: String,
        path: Vec<String>,
        date_added: Option<DateTime<Utc>>,
    ) -> Self {
        let folder = path.last().cloned();
        Self {
            id,
            title,
            url,
            folder,
            path,
            date_added,
        }
    }

    /// The `" > "`-joined rendering of `path`, falling back to `folder`
    /// when `path` is empty, then to the empty string.
    pub fn full_path(&self) -> String {
        if !self.path.is_empty() {
            self.path.join(PATH_SEPARATOR)
        } else {
            self.folder.clone().unwrap_or_default()
        }
    }

    /// Display title, substituting a placeholder when absent.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    /// Renders the bookmark as a numbered pager entry.
    ///
    /// The indented `[path]` line appears only when the path has more than
    /// one segment; single-folder and folderless bookmarks show just the
    /// title and URL.
    pub fn formatted(&self, index: usize) -> String {
        let mut out = format!("{}. {}\n", index, self.display_title());
        if self.path.len() > 1 {
            out.push_str(&format!("   [{}]\n", self.full_path()));
        }
        out.push_str(&format!("   {}", self.url));
        out
    }
}
