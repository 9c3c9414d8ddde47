use serde::Serialize;

use crate::error::Result;
use crate::traits::{FromRow, Row, RowExt};

/// Path of the first page of posts carrying `tag`.
pub fn posts_by_tag_link(tag: &str) -> String {
    format!("/posts/1/tag/{}", tag)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub tag: String,
    pub how_many_times_used: i64,
    pub posts_link: String,
}

impl FromRow for Tag {
    fn from_row<R: Row>(row: &R) -> Result<Self> {
        let tag: String = row.get("tag")?;
        Ok(Self {
            id: row.get("id")?,
            how_many_times_used: row.get_or_default("howManyTimesUsed")?,
            posts_link: posts_by_tag_link(&tag),
            tag,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagCollection {
    pub tags: Vec<Tag>,
}

impl From<Vec<Tag>> for TagCollection {
    fn from(tags: Vec<Tag>) -> Self {
        Self { tags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Record;

    #[test]
    fn test_link_format() {
        assert_eq!(posts_by_tag_link("golang"), "/posts/1/tag/golang");
    }

    #[test]
    fn test_from_row_and_json() {
        let record = Record::new()
            .with("id", 3i64)
            .with("tag", "golang")
            .with("howManyTimesUsed", 12i64);
        let tag = Tag::from_row(&record).unwrap();
        assert_eq!(tag.posts_link, "/posts/1/tag/golang");

        let json = serde_json::to_value(TagCollection::from(vec![tag])).unwrap();
        assert_eq!(json["tags"][0]["howManyTimesUsed"], 12);
        assert_eq!(json["tags"][0]["postsLink"], "/posts/1/tag/golang");
    }
}
