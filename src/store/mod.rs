// Local persistence for puzzle inputs.
// SQLite-backed store plus the default file locations.

pub mod paths;
pub mod sqlite;

pub use sqlite::Store;
