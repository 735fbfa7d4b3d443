//! The long-lived service agent.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};
use url::Url;

use super::routing::{RequestRouter, Route};
use super::strategy;
use super::HostControl;
use crate::net::Network;
use crate::store::{CacheHandle, CacheStore};
use crate::telemetry;
use crate::types::{FetchRequest, FetchResponse, Manifest, RequestKey};
use crate::Result;

/// The request-handling agent interposed between an application and the
/// network.
///
/// One instance lives for the whole process. The host drives it through
/// three explicit lifecycle hooks, awaiting each returned operation:
///
/// - [`on_install`](Self::on_install) — preload the shell manifest into
///   the current generation, then signal skip-waiting;
/// - [`on_activate`](Self::on_activate) — prune superseded generations,
///   then signal claim-clients;
/// - [`on_request`](Self::on_request) — route one intercepted request and
///   produce its response.
///
/// Construct via [`Vordr::builder()`](crate::Vordr::builder).
pub struct ServiceAgent {
    store: Arc<dyn CacheStore>,
    network: Arc<dyn Network>,
    control: Arc<dyn HostControl>,
    router: RequestRouter,
    generation: String,
    manifest: Manifest,
    origin: Url,
    root: RequestKey,
}

impl std::fmt::Debug for ServiceAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAgent")
            .field("router", &self.router)
            .field("generation", &self.generation)
            .field("manifest", &self.manifest)
            .field("origin", &self.origin)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl ServiceAgent {
    pub(crate) fn new(
        store: Arc<dyn CacheStore>,
        network: Arc<dyn Network>,
        control: Arc<dyn HostControl>,
        router: RequestRouter,
        generation: String,
        manifest: Manifest,
        origin: Url,
        root: RequestKey,
    ) -> Self {
        Self {
            store,
            network,
            control,
            router,
            generation,
            manifest,
            origin,
            root,
        }
    }

    /// Name of the current cache generation.
    pub fn generation(&self) -> &str {
        &self.generation
    }

    /// The shell manifest preloaded at installation.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Installation hook: preload the shell, then signal skip-waiting.
    ///
    /// Opens (create-if-absent) the current generation and inserts a
    /// snapshot for each manifest resource. Partial-failure tolerant: an
    /// unreachable or non-2xx resource is skipped with a warning and
    /// installation still succeeds. Errors only if the generation itself
    /// cannot be opened.
    pub async fn on_install(&self) -> Result<()> {
        let cache = self.store.open(&self.generation).await?;
        if !self.manifest.is_empty() {
            join_all(self.manifest.iter().map(|path| self.preload(&cache, path))).await;
        }
        if let Err(e) = self.control.skip_waiting().await {
            warn!(error = %e, "skip-waiting signal failed");
        }
        Ok(())
    }

    /// Fetch and store one shell resource, tolerating failure.
    async fn preload(&self, cache: &Arc<dyn CacheHandle>, path: &str) {
        let url = match self.origin.join(path) {
            Ok(url) => url,
            Err(e) => {
                metrics::counter!(telemetry::PRELOAD_SKIPS_TOTAL).increment(1);
                warn!(path, error = %e, "manifest path does not resolve, skipping");
                return;
            }
        };
        let request = FetchRequest::get(url);
        match self.network.fetch(&request).await {
            Ok(response) if response.is_success() => {
                if let Err(e) = cache.put(request.key(), response.snapshot()).await {
                    metrics::counter!(telemetry::PRELOAD_SKIPS_TOTAL).increment(1);
                    warn!(path, error = %e, "shell resource could not be stored, skipping");
                }
            }
            Ok(response) => {
                metrics::counter!(telemetry::PRELOAD_SKIPS_TOTAL).increment(1);
                warn!(path, status = response.status, "shell resource not ok, skipping");
            }
            Err(e) => {
                metrics::counter!(telemetry::PRELOAD_SKIPS_TOTAL).increment(1);
                warn!(path, error = %e, "shell resource unreachable, skipping");
            }
        }
    }

    /// Activation hook: prune superseded generations, then signal
    /// claim-clients.
    ///
    /// Cleanup is best-effort per generation; claiming control takes
    /// precedence over cleanup, so this completes successfully even when
    /// enumeration or deletion fails. Idempotent: re-activating with only
    /// the current generation present is a no-op.
    pub async fn on_activate(&self) -> Result<()> {
        match self.store.list_generations().await {
            Ok(names) => {
                for name in names.iter().filter(|name| **name != self.generation) {
                    match self.store.delete_generation(name).await {
                        Ok(true) => {
                            metrics::counter!(telemetry::GENERATIONS_PRUNED_TOTAL).increment(1);
                            debug!(generation = %name, "pruned stale generation");
                        }
                        Ok(false) => {}
                        Err(e) => {
                            warn!(generation = %name, error = %e, "failed to prune stale generation");
                        }
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "generation enumeration failed, skipping cleanup");
            }
        }
        if let Err(e) = self.control.claim_clients().await {
            warn!(error = %e, "claim-clients signal failed");
        }
        Ok(())
    }

    /// Request hook: classify and dispatch one intercepted request.
    ///
    /// Bypassed requests (cross-origin or API-prefixed) are forwarded to
    /// the network exactly once, unmodified, with no cache involvement.
    /// Cacheable requests go through the network-first strategy.
    pub async fn on_request(&self, request: FetchRequest) -> Result<FetchResponse> {
        let (route, result) = match self.router.classify(&request.url) {
            Route::Bypass => {
                debug!(url = %request.url, "bypassing cache");
                ("bypass", self.network.fetch(&request).await)
            }
            Route::FetchAndCache => {
                let result = match self.store.open(&self.generation).await {
                    Ok(cache) => {
                        strategy::network_first(
                            self.network.as_ref(),
                            cache.as_ref(),
                            &self.root,
                            &request,
                        )
                        .await
                    }
                    Err(e) => {
                        // Worst case is "no offline support for this request"
                        debug!(url = %request.url, error = %e, "store unavailable, fetching without cache");
                        self.network.fetch(&request).await
                    }
                };
                ("cache", result)
            }
        };
        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::REQUESTS_TOTAL, "route" => route, "status" => status)
            .increment(1);
        result
    }
}
