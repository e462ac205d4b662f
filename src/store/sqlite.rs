// Puzzle store backed by a single SQLite file.
// One table keyed by (year, day); rows are inserted once and never updated.

use std::path::{Path, PathBuf};

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{Result, RudolfError};
use crate::puzzle::{PuzzleInput, PuzzleKey};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS puzzles (
    year INTEGER NOT NULL,
    day INTEGER NOT NULL,
    input BLOB NOT NULL,
    PRIMARY KEY (year, day)
)";

const TABLE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'puzzles'";

const SELECT_INPUT: &str = "SELECT input FROM puzzles WHERE year = ?1 AND day = ?2";

const INSERT_INPUT: &str = "INSERT INTO puzzles (year, day, input) VALUES (?1, ?2, ?3)";

/// Handle to the local puzzle database.
///
/// The connection is released when the handle is dropped; use [`Store::close`]
/// to observe close errors.
pub struct Store {
    conn: Connection,
    path: PathBuf,
}

impl Store {
    /// Open (or create) the store file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| RudolfError::StoreUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened puzzle store");

        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open a store that lives only as long as the handle.
    pub fn open_in_memory() -> Result<Self> {
        let path = PathBuf::from(":memory:");
        let conn = Connection::open_in_memory()
            .map_err(|source| RudolfError::StoreUnavailable {
                path: path.clone(),
                source,
            })?;
        Ok(Self { conn, path })
    }

    /// Look up the input stored for `key`.
    ///
    /// A missing table reads as an absent key, since lookups always precede
    /// the first insert.
    pub fn get(&self, key: PuzzleKey) -> Result<Option<PuzzleInput>> {
        if !self.table_exists()? {
            return Ok(None);
        }

        self.conn
            .query_row(SELECT_INPUT, params![key.year, key.day], |row| {
                // Rows written by other tools may hold TEXT instead of BLOB.
                match row.get_ref(0)? {
                    ValueRef::Blob(bytes) | ValueRef::Text(bytes) => {
                        Ok(PuzzleInput::new(bytes.to_vec()))
                    }
                    ValueRef::Null => Ok(PuzzleInput::default()),
                    other => Err(rusqlite::Error::InvalidColumnType(
                        0,
                        "input".to_string(),
                        other.data_type(),
                    )),
                }
            })
            .optional()
            .map_err(RudolfError::StoreReadFailed)
    }

    /// Insert the input for `key`.
    ///
    /// This is a plain insert: storing a key twice fails with a uniqueness
    /// violation instead of overwriting the first value.
    pub fn put(&self, key: PuzzleKey, input: &PuzzleInput) -> Result<()> {
        self.conn
            .execute(CREATE_TABLE, [])
            .map_err(RudolfError::StoreWriteFailed)?;
        self.conn
            .execute(INSERT_INPUT, params![key.year, key.day, input.as_bytes()])
            .map_err(RudolfError::StoreWriteFailed)?;
        Ok(())
    }

    /// Close the connection, reporting any error from SQLite.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, source)| RudolfError::StoreUnavailable { path, source })
    }

    fn table_exists(&self) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(TABLE_EXISTS, [], |row| row.get(0))
            .map_err(RudolfError::StoreReadFailed)?;
        Ok(count > 0)
    }
}
