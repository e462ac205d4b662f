// Cache-aside resolution of puzzle inputs.
// Reads the local store first and only goes to the remote source on a miss.

use crate::config::Config;
use crate::error::Result;
use crate::puzzle::{PuzzleInput, PuzzleKey};
use crate::remote::{AocClient, PuzzleSource};
use crate::store::Store;

/// Read-through resolver over an explicit store handle and remote source.
pub struct Resolver<S> {
    store: Store,
    source: S,
}

impl<S: PuzzleSource> Resolver<S> {
    pub fn new(store: Store, source: S) -> Self {
        Self { store, source }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the input for `key`, fetching and caching it on a miss.
    ///
    /// A stored value (even an empty one) is returned without touching the
    /// source. A failed fetch leaves the store untouched. A failed cache
    /// write is logged and the fetched value is still returned.
    pub async fn resolve(&self, key: PuzzleKey) -> Result<PuzzleInput> {
        if let Some(input) = self.store.get(key)? {
            tracing::debug!(%key, bytes = input.len(), "puzzle input cache hit");
            return Ok(input);
        }

        tracing::debug!(%key, "puzzle input cache miss");
        let input = self.source.fetch(key).await?;

        match self.store.put(key, &input) {
            Ok(()) => tracing::info!(%key, bytes = input.len(), "cached puzzle input"),
            Err(e) => tracing::warn!(%key, error = %e, "failed to cache puzzle input"),
        }

        Ok(input)
    }

    /// Give back the store handle.
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Close the underlying store.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

/// Resolve `key` with the store and client described by `config`.
///
/// The store is opened first; if that fails no request is made. The store
/// is closed again before returning, on success and on error alike.
pub async fn resolve_input(config: &Config, key: PuzzleKey) -> Result<PuzzleInput> {
    let store = Store::open(&config.db_path)?;
    let client = AocClient::new(config)?;
    let resolver = Resolver::new(store, client);

    let result = resolver.resolve(key).await;
    if let Err(e) = resolver.close() {
        tracing::warn!(error = %e, "failed to close puzzle store");
    }
    result
}
