//! Default configuration values - single source of truth

/// Posts returned per listing page
pub const POSTS_PER_PAGE: i64 = 10;

/// Upper bound on pooled database connections
pub const MAX_CONNECTIONS: usize = 151;

/// Address the HTTP server binds to
pub const SERVER_ADDRESS: &str = "localhost";

/// Port the HTTP server listens on
pub const SERVER_PORT: u16 = 8081;

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "texo-services";

/// Prefix of environment variable overrides (TEXO_*)
pub const ENV_PREFIX: &str = "TEXO";
