//! Blog listing state.
//!
//! DESIGN
//! ======
//! The listing starts in the loading state: the page issues its single fetch
//! on mount, so the server-rendered markup already shows the skeleton rows
//! and hydration does not flash an empty list first.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use crate::net::error::ApiError;
use crate::net::types::Post;

/// Placeholder rows rendered while the listing request is pending.
pub const SKELETON_ROWS: usize = 5;

/// Author label used when a post has no author name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Display name for a post's author, falling back to [`ANONYMOUS_AUTHOR`].
pub fn author_label(post: &Post) -> &str {
    match post.author.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => ANONYMOUS_AUTHOR,
    }
}

/// Listing fetched once per page mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogsState {
    pub items: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for BlogsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl BlogsState {
    /// Store the fetch result and leave the loading state.
    pub fn resolve(&mut self, result: Result<Vec<Post>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    /// Skeleton rows to draw right now.
    pub fn skeleton_rows(&self) -> usize {
        if self.loading { SKELETON_ROWS } else { 0 }
    }

    /// Posts to draw right now; empty while loading.
    pub fn visible_items(&self) -> &[Post] {
        if self.loading { &[] } else { &self.items }
    }
}
