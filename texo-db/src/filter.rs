//! Post filters and the SQL predicate built from them
//!
//! A [`PostFilter`] names the criteria; [`PostFilter::predicate`] turns the
//! active ones into an ordered list of [`Clause`]s. Each clause carries its
//! own parameters, so the predicate text and the bound values are always
//! produced from the same list and cannot drift apart.

use crate::traits::ToValue;
use crate::value::Value;

/// Always-true base of every predicate.
const BASE_CLAUSE: &str = "1=1";

const STATUS_CLAUSE: &str = "`poststatus`.`status` = ?";
const YEAR_CLAUSE: &str = "`post`.`publishedYear` = ?";
const MONTH_CLAUSE: &str = "`post`.`publishedMonth` = ?";
const SLUG_CLAUSE: &str = "`post`.`slug` = ?";
const TAG_CLAUSE: &str = "EXISTS (\
    SELECT 1 FROM `post_posttag` \
    INNER JOIN `posttag` ON `posttag`.`id` = `post_posttag`.`postTagId` \
    WHERE `post_posttag`.`postId` = `post`.`id` AND `posttag`.`tag` = ?)";
const TERM_CLAUSE: &str = "(`post`.`title` LIKE ? ESCAPE '!' OR `post`.`content` LIKE ? ESCAPE '!')";

/// Publication state of a post, as stored in `poststatus.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Archived => "Archived",
        }
    }
}

/// Criteria for selecting posts. Unset, empty or non-positive fields do not
/// filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub status: Option<PostStatus>,
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub slug: Option<String>,
    pub tag: Option<String>,
    pub term: Option<String>,
}

impl PostFilter {
    /// Filter matching every post regardless of status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter matching published posts only.
    pub fn published() -> Self {
        Self::new().with_status(PostStatus::Published)
    }

    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_month(mut self, month: i32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Build the predicate for the active criteria.
    ///
    /// Clause order is fixed: status, year, month, slug, tag, term.
    pub fn predicate(&self) -> Predicate {
        let mut predicate = Predicate::default();

        if let Some(status) = self.status {
            predicate.push(STATUS_CLAUSE, vec![status.as_str().to_value()]);
        }
        if let Some(year) = self.year.filter(|y| *y > 0) {
            predicate.push(YEAR_CLAUSE, vec![year.to_value()]);
        }
        if let Some(month) = self.month.filter(|m| *m > 0) {
            predicate.push(MONTH_CLAUSE, vec![month.to_value()]);
        }
        if let Some(slug) = non_empty(&self.slug) {
            predicate.push(SLUG_CLAUSE, vec![slug.to_value()]);
        }
        if let Some(tag) = non_empty(&self.tag) {
            predicate.push(TAG_CLAUSE, vec![tag.to_value()]);
        }
        if let Some(term) = non_empty(&self.term) {
            let pattern = format!("%{}%", escape_like(term));
            predicate.push(TERM_CLAUSE, vec![pattern.to_value(), pattern.to_value()]);
        }

        predicate
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Escape `LIKE` metacharacters so the term matches literally.
/// Pairs with the `ESCAPE '!'` in the term clause.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '!' | '%' | '_') {
            escaped.push('!');
        }
        escaped.push(c);
    }
    escaped
}

/// One `AND`-ed condition together with the values for its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub sql: &'static str,
    pub params: Vec<Value>,
}

/// An ordered, conjunctive list of clauses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    fn push(&mut self, sql: &'static str, params: Vec<Value>) {
        debug_assert_eq!(sql.matches('?').count(), params.len());
        self.clauses.push(Clause { sql, params });
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The WHERE-clause text: the base clause followed by every clause,
    /// joined with `AND`.
    pub fn sql(&self) -> String {
        let mut sql = String::from(BASE_CLAUSE);
        for clause in &self.clauses {
            sql.push_str(" AND ");
            sql.push_str(clause.sql);
        }
        sql
    }

    /// All parameters, in placeholder order.
    pub fn params(&self) -> Vec<Value> {
        self.clauses
            .iter()
            .flat_map(|c| c.params.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(v: &str) -> Value {
        Value::String(v.to_string())
    }

    #[test]
    fn test_empty_filter_is_base_clause() {
        let predicate = PostFilter::new().predicate();
        assert_eq!(predicate.sql(), "1=1");
        assert!(predicate.params().is_empty());
    }

    #[test]
    fn test_published_status() {
        let predicate = PostFilter::published().predicate();
        assert_eq!(predicate.sql(), "1=1 AND `poststatus`.`status` = ?");
        assert_eq!(predicate.params(), vec![text("Published")]);
    }

    #[test]
    fn test_full_filter_order_and_params() {
        let predicate = PostFilter::published()
            .with_year(2023)
            .with_month(5)
            .with_slug("hello")
            .predicate();

        assert_eq!(
            predicate.sql(),
            "1=1 AND `poststatus`.`status` = ? AND `post`.`publishedYear` = ? \
             AND `post`.`publishedMonth` = ? AND `post`.`slug` = ?"
        );
        assert_eq!(
            predicate.params(),
            vec![text("Published"), Value::I64(2023), Value::I64(5), text("hello")]
        );
    }

    #[test]
    fn test_non_positive_dates_and_empty_strings_are_ignored() {
        let predicate = PostFilter::new()
            .with_year(0)
            .with_month(-1)
            .with_slug("")
            .with_tag("")
            .with_term("")
            .predicate();
        assert_eq!(predicate.sql(), "1=1");
        assert!(predicate.clauses().is_empty());
    }

    #[test]
    fn test_tag_and_term_are_conjunctive() {
        let predicate = PostFilter::published()
            .with_tag("x")
            .with_term("y")
            .predicate();
        let sql = predicate.sql();

        assert_eq!(predicate.clauses().len(), 3);
        assert_eq!(sql.matches(" AND EXISTS (").count(), 1);
        assert!(sql.ends_with(&format!(" AND {}", TERM_CLAUSE)));
        assert_eq!(
            predicate.params(),
            vec![text("Published"), text("x"), text("%y%"), text("%y%")]
        );
    }

    #[test]
    fn test_term_is_bound_not_spliced() {
        let hostile = "'; DROP TABLE post; --";
        let predicate = PostFilter::new().with_term(hostile).predicate();

        assert!(!predicate.sql().contains("DROP TABLE"));
        assert_eq!(
            predicate.params(),
            vec![
                text("%'; DROP TABLE post; --%"),
                text("%'; DROP TABLE post; --%")
            ]
        );
    }

    #[test]
    fn test_like_metacharacters_are_escaped() {
        assert_eq!(escape_like("100%"), "100!%");
        assert_eq!(escape_like("snake_case!"), "snake!_case!!");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_placeholders_match_params() {
        let predicate = PostFilter::published()
            .with_year(2020)
            .with_month(1)
            .with_slug("s")
            .with_tag("t")
            .with_term("q")
            .predicate();
        assert_eq!(
            predicate.sql().matches('?').count(),
            predicate.params().len()
        );
    }
}
