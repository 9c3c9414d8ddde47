//! Read API over an injected pool

use tracing::debug;

use crate::error::Result;
use crate::filter::PostFilter;
use crate::models::{Post, PostCollection, Tag, TagCollection};
use crate::pagination::PageRequest;
use crate::traits::Pool;
use crate::{posts, tags};

/// Read operations over the blog's posts and tags.
///
/// Post operations only see published posts. Lookups that match nothing
/// return `Ok(None)`; database failures are returned as they are.
#[derive(Debug, Clone)]
pub struct Blog<P> {
    pool: P,
}

impl<P: Pool> Blog<P> {
    pub fn new(pool: P) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// One page of posts matching an arbitrary filter.
    pub async fn posts(&self, filter: &PostFilter, page: PageRequest) -> Result<PostCollection> {
        posts::query(&self.pool, filter, page).await
    }

    pub async fn published_posts(&self, page: PageRequest) -> Result<PostCollection> {
        self.posts(&PostFilter::published(), page).await
    }

    pub async fn published_posts_by_tag(
        &self,
        page: PageRequest,
        tag: &str,
    ) -> Result<PostCollection> {
        self.posts(&PostFilter::published().with_tag(tag), page)
            .await
    }

    /// Published posts whose title or content contains `term`.
    pub async fn published_posts_by_term(
        &self,
        page: PageRequest,
        term: &str,
    ) -> Result<PostCollection> {
        self.posts(&PostFilter::published().with_term(term), page)
            .await
    }

    /// The published post at `/post/{year}/{month}/{slug}`.
    pub async fn post(&self, year: i32, month: i32, slug: &str) -> Result<Option<Post>> {
        let filter = PostFilter::published()
            .with_year(year)
            .with_month(month)
            .with_slug(slug);
        let found = self
            .posts(&filter, PageRequest::single())
            .await?
            .posts
            .into_iter()
            .next();

        if found.is_none() {
            debug!("No published post at {}/{}/{}", year, month, slug);
        }
        Ok(found)
    }

    pub async fn tag(&self, id: i64) -> Result<Option<Tag>> {
        tags::find_by_id(&self.pool, id).await
    }

    /// Tags in use by at least one post, most used first.
    pub async fn tags(&self) -> Result<TagCollection> {
        Ok(tags::find_in_use(&self.pool).await?.into())
    }
}
