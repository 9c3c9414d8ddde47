//! texo-services: JSON read API for the texo blog
//!
//! Serves published posts and tags from MySQL over HTTP:
//!
//! | Route | Response |
//! |---|---|
//! | `GET /v1/posts/{page}` | one page of published posts |
//! | `GET /v1/posts/{page}/tag/{tag}` | published posts carrying a tag |
//! | `GET /v1/posts/{page}/search/{term}` | published posts whose title or content contains a term |
//! | `GET /v1/post/{year}/{month}/{slug}` | a single published post, or 404 |
//! | `GET /v1/tags` | tags in use, most used first |
//! | `GET /v1/tag/{id}` | a single tag, or 404 |
//! | `GET /v1/test` | liveness probe |
//!
//! # Configuration
//!
//! Settings come from an optional `texo-services.toml` overlaid with
//! `TEXO_*` environment variables; see [`ServiceConfig`].

pub mod api;
pub mod config;
pub mod server;
pub mod state;

pub use api::app;
pub use config::{ConfigError, ServiceConfig};
pub use state::AppState;
