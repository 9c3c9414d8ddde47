//! texo-db - read-side data access for the texo blog
//!
//! Posts and tags live in MySQL; this crate turns filter criteria into
//! parameterized SQL, runs it through a [`Pool`], and maps the rows into
//! JSON-friendly collections.
//!
//! # Features
//!
//! - **Structured predicates**: [`PostFilter`] builds an ordered list of
//!   clause/parameter pairs shared by the count and data queries
//! - **Pagination**: [`PageRequest`] and [`PageInfo`] compute offsets and
//!   page links from a total row count
//! - **Injected pool**: [`Blog`] owns whatever [`Pool`] it is given, so
//!   tests can swap in a scripted pool
//!
//! # Example
//!
//! ```ignore
//! use texo_db::{Blog, MySqlPool, PageRequest, SqlConnection};
//!
//! let pool = MySqlPool::builder_for(&connection).pool_max(20).build()?;
//! let blog = Blog::new(pool);
//!
//! let page = blog.published_posts(PageRequest::new(1, 10)?).await?;
//! for post in &page.posts {
//!     println!("{} -> {}", post.title, post.permalink);
//! }
//! ```

pub mod blog;
pub mod connection;
pub mod error;
pub mod filter;
pub mod models;
pub mod mysql;
pub mod pagination;
pub mod posts;
pub mod query;
pub mod row;
pub mod tags;
pub mod traits;
pub mod value;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use blog::Blog;
pub use connection::SqlConnection;
pub use error::{Error, Result};
pub use filter::{PostFilter, PostStatus, Predicate};
pub use models::{
    permalink, posts_by_tag_link, render_markdown, Post, PostCollection, Tag, TagCollection,
};
pub use mysql::{MySqlPool, MySqlPoolBuilder};
pub use pagination::{total_pages, PageInfo, PageRequest};
pub use query::Query;
pub use row::Record;
pub use traits::{ExecuteResult, FromRow, FromValue, Pool, Row, RowExt, ToValue};
pub use value::Value;
