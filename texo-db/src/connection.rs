//! Connection parameters for the blog database

use std::fmt;

/// Everything needed to reach the MySQL server holding the blog.
///
/// Built once at startup from configuration and handed to
/// [`MySqlPool::builder_for`](crate::MySqlPool::builder_for).
#[derive(Clone, PartialEq, Eq)]
pub struct SqlConnection {
    pub address: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl SqlConnection {
    /// Driver options for this connection.
    ///
    /// Built field by field rather than through a URL so passwords with
    /// reserved URL characters need no escaping.
    pub fn to_opts(&self) -> mysql_async::OptsBuilder {
        mysql_async::OptsBuilder::default()
            .ip_or_hostname(self.address.clone())
            .tcp_port(self.port)
            .db_name(Some(self.database.clone()))
            .user(Some(self.username.clone()))
            .pass(Some(self.password.clone()))
    }
}

// Keep the password out of logs.
impl fmt::Debug for SqlConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlConnection")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Display for SqlConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mysql://{}@{}:{}/{}",
            self.username, self.address, self.port, self.database
        )
    }
}
