//! Service configuration: defaults, file and environment layering

pub mod defaults;
mod settings;

pub use settings::{ConfigError, ServiceConfig};
