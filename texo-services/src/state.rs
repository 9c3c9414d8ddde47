//! Shared request state

use std::sync::Arc;

use texo_db::{Blog, PageRequest, Pool};

/// State handed to every handler.
///
/// Cloned per request; the blog (and the pool inside it) is shared.
pub struct AppState<P> {
    pub blog: Arc<Blog<P>>,
    pub posts_per_page: i64,
}

impl<P: Pool> AppState<P> {
    pub fn new(blog: Blog<P>, posts_per_page: i64) -> Self {
        Self {
            blog: Arc::new(blog),
            posts_per_page,
        }
    }

    /// A listing request for `page` at the configured page size.
    pub fn page(&self, page: i64) -> texo_db::Result<PageRequest> {
        PageRequest::new(page, self.posts_per_page)
    }
}

// Derived Clone would require P: Clone.
impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            blog: Arc::clone(&self.blog),
            posts_per_page: self.posts_per_page,
        }
    }
}
