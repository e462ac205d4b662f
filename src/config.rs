// Runtime configuration.
// File locations and remote endpoint settings shared by the store and the client.

use std::path::PathBuf;
use std::time::Duration;

use crate::store::paths;

/// Default remote endpoint.
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Default request timeout. The remote has no deadline of its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(
    "rudolf/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/wallabythree/rudolf)"
);

/// Settings for one run of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database holding cached inputs.
    pub db_path: PathBuf,
    /// Cookie jar carrying the session credential.
    pub cookie_jar: PathBuf,
    /// Scheme and host of the remote endpoint.
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: paths::db_path(),
            cookie_jar: paths::cookie_jar_path(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = path.into();
        self
    }

    pub fn with_cookie_jar(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookie_jar = path.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
