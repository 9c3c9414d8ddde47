//! Entities returned by the read API

mod post;
mod tag;

pub use post::{permalink, render_markdown, Post, PostCollection};
pub use tag::{posts_by_tag_link, Tag, TagCollection};
