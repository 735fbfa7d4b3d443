//! Bundled in-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use tokio::sync::RwLock;

use super::{CacheHandle, CacheStore};
use crate::Result;
use crate::types::{RequestKey, Snapshot};

/// Default maximum number of entries per generation.
const DEFAULT_MAX_ENTRIES: u64 = 2_048;

/// Configuration for the bundled [`MemoryStore`].
///
/// ```rust
/// # use vordr::StoreConfig;
/// let config = StoreConfig::new().max_entries(512);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of entries per generation. Default: 2,048.
    ///
    /// This bounds memory in long-running processes; it is not an
    /// eviction *policy* surface. The shell manifest is expected to be
    /// far smaller than the bound.
    pub max_entries: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl StoreConfig {
    /// Create a new config with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of entries per generation.
    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }
}

/// In-memory [`CacheStore`] holding one bounded moka cache per generation.
///
/// Generations are created implicitly on first open. Per-key writes are
/// atomic and last-write-wins.
pub struct MemoryStore {
    config: StoreConfig,
    generations: RwLock<HashMap<String, Arc<MemoryGeneration>>>,
}

impl MemoryStore {
    /// Create a store with the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            generations: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn open(&self, generation: &str) -> Result<Arc<dyn CacheHandle>> {
        {
            let generations = self.generations.read().await;
            if let Some(existing) = generations.get(generation) {
                return Ok(existing.clone());
            }
        }
        let mut generations = self.generations.write().await;
        let handle = generations
            .entry(generation.to_string())
            .or_insert_with(|| Arc::new(MemoryGeneration::new(&self.config)))
            .clone();
        Ok(handle)
    }

    async fn list_generations(&self) -> Result<Vec<String>> {
        Ok(self.generations.read().await.keys().cloned().collect())
    }

    async fn delete_generation(&self, generation: &str) -> Result<bool> {
        Ok(self.generations.write().await.remove(generation).is_some())
    }
}

/// One generation's entries, backed by a bounded moka cache.
struct MemoryGeneration {
    entries: Cache<RequestKey, Snapshot>,
}

impl MemoryGeneration {
    fn new(config: &StoreConfig) -> Self {
        Self {
            entries: Cache::new(config.max_entries),
        }
    }
}

#[async_trait]
impl CacheHandle for MemoryGeneration {
    async fn put(&self, key: RequestKey, snapshot: Snapshot) -> Result<()> {
        self.entries.insert(key, snapshot).await;
        Ok(())
    }

    async fn lookup(&self, key: &RequestKey) -> Result<Option<Snapshot>> {
        Ok(self.entries.get(key).await)
    }

    async fn keys(&self) -> Result<Vec<RequestKey>> {
        self.entries.run_pending_tasks().await;
        Ok(self.entries.iter().map(|(key, _)| (*key).clone()).collect())
    }

    async fn len(&self) -> Result<u64> {
        // entry_count is eventually consistent without this flush
        self.entries.run_pending_tasks().await;
        Ok(self.entries.entry_count())
    }
}
