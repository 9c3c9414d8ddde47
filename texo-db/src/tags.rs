//! Tag queries

use crate::error::Result;
use crate::models::Tag;
use crate::query::Query;
use crate::traits::Pool;

const SELECT_TAG_BY_ID: &str =
    "SELECT `id`, `tag`, `howManyTimesUsed` FROM `posttag` WHERE `id` = ?";

const SELECT_TAGS_IN_USE: &str = "SELECT `id`, `tag`, `howManyTimesUsed` FROM `posttag` \
    WHERE `howManyTimesUsed` > 0 ORDER BY `howManyTimesUsed` DESC";

/// Find a tag by its id.
pub async fn find_by_id<P: Pool>(pool: &P, id: i64) -> Result<Option<Tag>> {
    Query::new(SELECT_TAG_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Tags attached to at least one post, most used first.
pub async fn find_in_use<P: Pool>(pool: &P) -> Result<Vec<Tag>> {
    Query::new(SELECT_TAGS_IN_USE).fetch_all(pool).await
}
