//! The durable cache store capability.
//!
//! The agent treats persisted storage as an opaque capability behind two
//! traits: [`CacheStore`] addresses the store as a whole (generations),
//! [`CacheHandle`] addresses one generation's entries. The decision logic
//! never depends on a concrete implementation; the bundled
//! [`MemoryStore`] is a moka-backed in-process store, and embedders with
//! real persistence (disk, IndexedDB-alike, sqlite) implement the same
//! traits and inject via the builder.
//!
//! # Write semantics
//!
//! Entries are fully-replaceable values, never partially mutated.
//! Correctness under concurrent writers relies on the store's per-key
//! write atomicity: the most recently completed write for a key wins.

pub mod memory;

pub use memory::{MemoryStore, StoreConfig};

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;
use crate::types::{RequestKey, Snapshot};

/// A key-value store partitioned by generation name.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Open a generation, creating it if absent.
    async fn open(&self, generation: &str) -> Result<Arc<dyn CacheHandle>>;

    /// Enumerate all generation names known to the store.
    async fn list_generations(&self) -> Result<Vec<String>>;

    /// Delete a generation and all of its entries.
    ///
    /// Returns `false` if no such generation existed. Deleting is
    /// idempotent from the caller's perspective.
    async fn delete_generation(&self, generation: &str) -> Result<bool>;
}

/// One generation's entries.
#[async_trait]
pub trait CacheHandle: Send + Sync {
    /// Insert a snapshot under the given key, replacing any prior entry.
    async fn put(&self, key: RequestKey, snapshot: Snapshot) -> Result<()>;

    /// Look up the snapshot stored for a key, if any.
    async fn lookup(&self, key: &RequestKey) -> Result<Option<Snapshot>>;

    /// Enumerate the keys currently stored in this generation.
    async fn keys(&self) -> Result<Vec<RequestKey>>;

    /// Number of entries currently stored in this generation.
    async fn len(&self) -> Result<u64>;
}
