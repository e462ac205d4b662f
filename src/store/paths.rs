// Default file locations.
// The database and cookie jar live in the working directory, with a per-user fallback for the jar.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// Database file name, relative to the working directory.
pub const DB_NAME: &str = "rudolf.db";

/// Cookie jar file name, relative to the working directory.
pub const COOKIE_JAR_NAME: &str = "cookie.txt";

/// Per-user configuration directory (~/.config/rudolf on Linux).
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rudolf").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default path of the puzzle database.
pub fn db_path() -> PathBuf {
    PathBuf::from(DB_NAME)
}

/// Default path of the cookie jar.
///
/// Prefers `cookie.txt` in the working directory; when that file is absent
/// and the user config directory has one, that is used instead.
pub fn cookie_jar_path() -> PathBuf {
    let local = PathBuf::from(COOKIE_JAR_NAME);
    cookie_jar_in(&local, config_dir().as_deref())
}

fn cookie_jar_in(local: &Path, config_dir: Option<&Path>) -> PathBuf {
    if local.exists() {
        return local.to_path_buf();
    }

    config_dir
        .map(|dir| dir.join(COOKIE_JAR_NAME))
        .filter(|path| path.exists())
        .unwrap_or_else(|| local.to_path_buf())
}
