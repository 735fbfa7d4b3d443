//! Builder for configuring agent instances

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::routing::RequestRouter;
use super::{HostControl, NoopControl, ServiceAgent};
use crate::net::{HttpNetwork, Network};
use crate::store::{CacheStore, MemoryStore, StoreConfig};
use crate::types::{Manifest, RequestKey};
use crate::{Result, VordrError};

/// Main entry point for creating agent instances.
pub struct Vordr;

impl Vordr {
    /// Create a new builder for configuring the agent.
    pub fn builder() -> VordrBuilder {
        VordrBuilder::new()
    }
}

/// Default API route prefix for the bypass rule.
const DEFAULT_API_PREFIX: &str = "/api/";

/// Builder for configuring agent instances.
pub struct VordrBuilder {
    generation: Option<String>,
    origin: Option<String>,
    manifest: Vec<String>,
    api_prefix: String,
    store: Option<Arc<dyn CacheStore>>,
    network: Option<Arc<dyn Network>>,
    control: Option<Arc<dyn HostControl>>,
    store_config: StoreConfig,
    timeout: Option<Duration>,
}

impl VordrBuilder {
    pub fn new() -> Self {
        Self {
            generation: None,
            origin: None,
            manifest: Vec::new(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            store: None,
            network: None,
            control: None,
            store_config: StoreConfig::default(),
            timeout: None,
        }
    }

    /// Set the current cache generation name (required).
    ///
    /// One generation is current per running agent version; superseded
    /// generations are pruned at activation.
    pub fn generation(mut self, name: impl Into<String>) -> Self {
        self.generation = Some(name.into());
        self
    }

    /// Set the application origin (required), e.g. `"https://app.example"`.
    ///
    /// Requests targeting a different origin are never intercepted.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the shell manifest: paths preloaded at installation.
    pub fn manifest<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manifest = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single shell resource path to the manifest.
    pub fn shell_resource(mut self, path: impl Into<String>) -> Self {
        self.manifest.push(path.into());
        self
    }

    /// Set the API route prefix for the bypass rule. Default: `"/api/"`.
    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Inject a cache store implementation.
    ///
    /// Defaults to the bundled [`MemoryStore`].
    pub fn store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Inject a network implementation.
    ///
    /// Defaults to the bundled [`HttpNetwork`].
    pub fn network(mut self, network: Arc<dyn Network>) -> Self {
        self.network = Some(network);
        self
    }

    /// Inject a host control implementation.
    ///
    /// Defaults to [`NoopControl`].
    pub fn control(mut self, control: Arc<dyn HostControl>) -> Self {
        self.control = Some(control);
        self
    }

    /// Bound the bundled store's per-generation capacity.
    ///
    /// Ignored when a store is injected via [`store()`](Self::store).
    pub fn store_capacity(mut self, max_entries: u64) -> Self {
        self.store_config = self.store_config.max_entries(max_entries);
        self
    }

    /// Set the bundled network's per-request timeout.
    ///
    /// Ignored when a network is injected via [`network()`](Self::network).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the agent.
    pub fn build(self) -> Result<ServiceAgent> {
        let generation = match self.generation {
            Some(name) if !name.is_empty() => name,
            Some(_) => {
                return Err(VordrError::Configuration(
                    "generation name must not be empty".into(),
                ));
            }
            None => {
                return Err(VordrError::Configuration(
                    "generation name is required".into(),
                ));
            }
        };

        let origin: Url = self
            .origin
            .ok_or_else(|| VordrError::Configuration("application origin is required".into()))?
            .parse()?;
        if origin.cannot_be_a_base() {
            return Err(VordrError::Configuration(
                "application origin must be an absolute hierarchical URL".into(),
            ));
        }

        // Root-document fallback identity: GET <origin>/
        let root = RequestKey::get(&origin.join("/")?);
        let router = RequestRouter::new(&origin, self.api_prefix);

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(MemoryStore::new(self.store_config)));
        let network = self.network.unwrap_or_else(|| {
            let mut net = HttpNetwork::new();
            if let Some(timeout) = self.timeout {
                net = net.timeout(timeout);
            }
            Arc::new(net)
        });
        let control = self.control.unwrap_or_else(|| Arc::new(NoopControl));

        Ok(ServiceAgent::new(
            store,
            network,
            control,
            router,
            generation,
            Manifest::new(self.manifest),
            origin,
            root,
        ))
    }
}

impl Default for VordrBuilder {
    fn default() -> Self {
        Self::new()
    }
}
