use chrono::NaiveDateTime;
use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::pagination::PageInfo;
use crate::traits::{FromRow, Row, RowExt};

/// Path of a single post: `/post/{year}/{month}/{slug}`.
pub fn permalink(year: i32, month: i32, slug: &str) -> String {
    format!("/post/{}/{}/{}", year, month, slug)
}

/// Render Markdown post content to HTML.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(source, options));
    out
}

/// A blog post joined with its author, status and tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    /// `firstName lastName` of the author.
    pub author: String,
    pub slug: String,
    pub content: String,
    /// `content` rendered as HTML.
    pub rendered_content: String,
    pub created_date_time: Option<NaiveDateTime>,
    pub published_date_time: Option<NaiveDateTime>,
    pub published_year: i32,
    pub published_month: i32,
    pub post_status_id: i64,
    pub status: String,
    /// Comma-joined tag names, as aggregated by the database.
    pub tag_list: String,
    /// Comma-joined tag ids, in the same order as `tag_list`.
    pub tag_id_list: String,
    pub tags: Vec<String>,
    pub tag_ids: Vec<i64>,
    pub permalink: String,
}

impl FromRow for Post {
    fn from_row<R: Row>(row: &R) -> Result<Self> {
        let slug: String = row.get("slug")?;
        let published_year: i32 = row.get_or_default("publishedYear")?;
        let published_month: i32 = row.get_or_default("publishedMonth")?;
        let tag_list: String = row.get_or_default("tagList")?;
        let tag_id_list: String = row.get_or_default("tagIdList")?;
        let content: String = row.get_or_default("content")?;

        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            author_id: row.get("authorId")?,
            author: row.get_or_default("author")?,
            rendered_content: render_markdown(&content),
            content,
            created_date_time: row.get("createdDateTime")?,
            published_date_time: row.get("publishedDateTime")?,
            post_status_id: row.get_or_default("postStatusId")?,
            status: row.get_or_default("status")?,
            tags: split_list(&tag_list).map(str::to_string).collect(),
            tag_ids: parse_ids(&tag_id_list)?,
            permalink: permalink(published_year, published_month, &slug),
            published_year,
            published_month,
            tag_list,
            tag_id_list,
            slug,
        })
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_ids(list: &str) -> Result<Vec<i64>> {
    split_list(list)
        .map(|id| {
            id.parse::<i64>().map_err(|_| Error::TypeConversion {
                expected: "comma-separated tag ids",
                actual: list.to_string(),
            })
        })
        .collect()
}

/// One page of posts plus the links around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCollection {
    #[serde(flatten)]
    pub page: PageInfo,
    pub posts: Vec<Post>,
}

impl PostCollection {
    pub fn new(page: PageInfo, posts: Vec<Post>) -> Self {
        Self { page, posts }
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
