//! Post listing queries
//!
//! Every post read is a count query followed by a data query, both built
//! around the same [`Predicate`].

use tracing::debug;

use crate::error::Result;
use crate::filter::{PostFilter, Predicate};
use crate::models::{Post, PostCollection};
use crate::pagination::{PageInfo, PageRequest};
use crate::query::Query;
use crate::traits::Pool;

const POST_FROM: &str = "FROM `post` \
    INNER JOIN `user` ON `user`.`id` = `post`.`authorId` \
    INNER JOIN `poststatus` ON `poststatus`.`id` = `post`.`postStatusId`";

const POST_COLUMNS: &str = "`post`.`id`, \
    `post`.`title`, \
    `post`.`authorId`, \
    CONCAT(`user`.`firstName`, ' ', `user`.`lastName`) AS `author`, \
    `post`.`slug`, \
    `post`.`content`, \
    `post`.`createdDateTime`, \
    `post`.`publishedDateTime`, \
    `post`.`publishedYear`, \
    `post`.`publishedMonth`, \
    `post`.`postStatusId`, \
    `poststatus`.`status` AS `status`, \
    (SELECT GROUP_CONCAT(`posttag`.`tag` ORDER BY `posttag`.`tag` SEPARATOR ',') \
        FROM `post_posttag` \
        INNER JOIN `posttag` ON `posttag`.`id` = `post_posttag`.`postTagId` \
        WHERE `post_posttag`.`postId` = `post`.`id`) AS `tagList`, \
    (SELECT GROUP_CONCAT(`posttag`.`id` ORDER BY `posttag`.`tag` SEPARATOR ',') \
        FROM `post_posttag` \
        INNER JOIN `posttag` ON `posttag`.`id` = `post_posttag`.`postTagId` \
        WHERE `post_posttag`.`postId` = `post`.`id`) AS `tagIdList`";

/// SQL counting the posts matching `predicate`.
pub fn count_sql(predicate: &Predicate) -> String {
    format!(
        "SELECT COUNT(`post`.`id`) AS `postCount` {} WHERE {}",
        POST_FROM,
        predicate.sql()
    )
}

/// SQL selecting one page of posts matching `predicate`, newest first.
/// The predicate parameters are followed by `LIMIT ?` and `OFFSET ?`.
pub fn select_sql(predicate: &Predicate) -> String {
    format!(
        "SELECT {} {} WHERE {} ORDER BY `post`.`createdDateTime` DESC LIMIT ? OFFSET ?",
        POST_COLUMNS,
        POST_FROM,
        predicate.sql()
    )
}

/// Count the matching posts, then fetch the requested page of them.
pub async fn query<P: Pool>(
    pool: &P,
    filter: &PostFilter,
    page: PageRequest,
) -> Result<PostCollection> {
    let predicate = filter.predicate();

    let total: i64 = Query::new(count_sql(&predicate))
        .bind_values(predicate.params())
        .fetch_scalar(pool)
        .await?;
    debug!(
        "Counted {} matching posts (page {}, page size {})",
        total,
        page.page(),
        page.page_size()
    );

    let posts: Vec<Post> = Query::new(select_sql(&predicate))
        .bind_values(predicate.params())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;
    debug!("Fetched {} posts", posts.len());

    Ok(PostCollection::new(PageInfo::new(page, total), posts))
}
