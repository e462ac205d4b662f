// rudolf: fetch and cache Advent of Code puzzle inputs.
// Inputs are read from a local SQLite store and downloaded only on a miss.

pub mod config;
pub mod error;
pub mod puzzle;
pub mod remote;
pub mod resolver;
pub mod store;
pub mod text;
pub mod timing;

pub use config::Config;
pub use error::{Result, RudolfError};
pub use puzzle::{PuzzleInput, PuzzleKey};
pub use remote::{AocClient, LocalPuzzleSource, PuzzleSource};
pub use resolver::{Resolver, resolve_input};
pub use store::Store;
pub use text::split;
pub use timing::{Timed, time};
