//! Pagination over a fixed bookmark collection.
//!
//! [`Pager`] holds the immutable item list, a fixed page size, and the
//! zero-based current page — the only mutable state. The interactive
//! navigation loop lives in [`interactive`].

pub mod interactive;

use std::io::{self, Write};

use crate::types::bookmark::Bookmark;

/// Status line shown when there is nothing to page through.
pub const EMPTY_STATUS: &str = "No bookmarks to display";

/// Slices an ordered bookmark collection into fixed-size pages.
pub struct Pager {
    items: Vec<Bookmark>,
    page_size: usize,
    current_page: usize,
}

impl Pager {
    /// Creates a pager starting on the first page. A zero `page_size` is
    /// clamped to 1.
    pub fn new(items: Vec<Bookmark>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            current_page: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `0` for an empty collection, else `ceil(len / page_size)`.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// The slice of items on the current page, clipped to bounds.
    pub fn current_items(&self) -> &[Bookmark] {
        let start = self.current_page * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    pub fn has_next(&self) -> bool {
        self.current_page + 1 < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    /// Moves to the next page. Returns `false` (no state change) when
    /// already on the last page.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page. Returns `false` when already first.
    pub fn go_back(&mut self) -> bool {
        if self.has_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to the zero-based page `n` if it exists. Returns `false`
    /// (no state change) otherwise.
    pub fn go_to(&mut self, n: usize) -> bool {
        if n < self.total_pages() {
            self.current_page = n;
            true
        } else {
            false
        }
    }

    /// Human-readable position line, e.g. `Showing 1-25 of 50 (page 1/2)`.
    pub fn page_status(&self) -> String {
        if self.items.is_empty() {
            return EMPTY_STATUS.to_string();
        }
        let first = self.current_page * self.page_size + 1;
        let last = ((self.current_page + 1) * self.page_size).min(self.items.len());
        format!(
            "Showing {}-{} of {} (page {}/{})",
            first,
            last,
            self.items.len(),
            self.current_page + 1,
            self.total_pages()
        )
    }

    /// Navigation prompt. Lists `next`/`prev` only when those moves are
    /// possible; `quit` is always available.
    pub fn prompt(&self) -> String {
        let mut parts = Vec::new();
        if self.has_next() {
            parts.push("n = next".to_string());
        }
        if self.has_prev() {
            parts.push("p = prev".to_string());
        }
        if self.total_pages() > 1 {
            parts.push(format!("1-{} = page", self.total_pages()));
        }
        parts.push("q = quit".to_string());
        format!("Commands: {}", parts.join(", "))
    }

    /// Writes the current page's numbered entries followed by the status
    /// line. Entry numbers are global 1-based indices into the collection.
    pub fn render_page<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let start = self.current_page * self.page_size;
        for (i, bookmark) in self.current_items().iter().enumerate() {
            writeln!(out, "{}", bookmark.formatted(start + i + 1))?;
        }
        writeln!(out, "{}", self.page_status())
    }
}
