// Remote puzzle source.
// HTTP client for the puzzle endpoint and the cookie jar that authenticates it.

pub mod client;
pub mod cookie;

pub use client::AocClient;

use crate::error::Result;
use crate::puzzle::{PuzzleInput, PuzzleKey};

/// Authoritative source of puzzle inputs.
#[trait_variant::make(PuzzleSource: Send)]
pub trait LocalPuzzleSource {
    /// Retrieve the input for `key`. Failures are never retried.
    async fn fetch(&self, key: PuzzleKey) -> Result<PuzzleInput>;
}
