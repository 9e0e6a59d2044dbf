//! Single post state for the post page.
//!
//! The page can be reused across `/blog/:id` navigations, so each fetch is
//! tagged with its id and a response for an id no longer shown is dropped.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use crate::net::error::ApiError;
use crate::net::types::Post;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogState {
    /// Id of the post being shown or fetched.
    pub id: Option<String>,
    pub post: Option<Post>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for BlogState {
    fn default() -> Self {
        Self {
            id: None,
            post: None,
            loading: true,
            error: None,
        }
    }
}

impl BlogState {
    /// Start showing `id`: drop the previous post and wait for a response.
    pub fn begin(&mut self, id: &str) {
        *self = Self {
            id: Some(id.to_owned()),
            ..Self::default()
        };
    }

    /// Apply the response for `id`. Returns `false` when it is stale.
    pub fn resolve(&mut self, id: &str, result: Result<Post, ApiError>) -> bool {
        if self.id.as_deref() != Some(id) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(post) => {
                self.post = Some(post);
                self.error = None;
            }
            Err(e) => {
                self.post = None;
                self.error = Some(e.to_string());
            }
        }
        true
    }
}
