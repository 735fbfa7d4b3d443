//! Network-first fetch-and-cache strategy.
//!
//! Per request: `DISPATCHED → {NETWORK_OK → CACHE_WRITE (best-effort) →
//! RETURNED} | {NETWORK_FAIL → CACHE_LOOKUP → {HIT → RETURNED} | {MISS →
//! ROOT_FALLBACK_LOOKUP → {HIT → RETURNED} | {MISS → FAILED}}}`.
//!
//! Network-first keeps cached content fresh whenever connectivity exists;
//! the cache is an offline safety net, not a performance cache. The only
//! caller-visible failure is a network error with no stored snapshot for
//! either the request or the root document.

use tracing::{debug, warn};

use crate::net::Network;
use crate::store::CacheHandle;
use crate::telemetry;
use crate::types::{FetchRequest, FetchResponse, RequestKey};
use crate::Result;

/// Run one cacheable request through the network-first strategy.
///
/// On a successful fetch the snapshot write is best-effort: a store
/// failure is counted and logged, and the live response is delivered
/// regardless. Store *lookup* failures during fallback are treated as
/// misses.
pub(crate) async fn network_first(
    network: &dyn Network,
    cache: &dyn CacheHandle,
    root: &RequestKey,
    request: &FetchRequest,
) -> Result<FetchResponse> {
    let key = request.key();

    let network_err = match network.fetch(request).await {
        Ok(response) => {
            if let Err(e) = cache.put(key, response.snapshot()).await {
                metrics::counter!(telemetry::WRITE_FAILURES_TOTAL).increment(1);
                debug!(url = %request.url, error = %e, "snapshot write failed, delivering response anyway");
            }
            return Ok(response);
        }
        Err(e) => e,
    };

    match cache.lookup(&key).await {
        Ok(Some(snapshot)) => {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "lookup" => "entry").increment(1);
            debug!(url = %request.url, "serving stored snapshot");
            return Ok(snapshot.into_response());
        }
        Ok(None) => {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "lookup" => "entry").increment(1);
        }
        Err(e) => {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "lookup" => "entry").increment(1);
            warn!(url = %request.url, error = %e, "snapshot lookup failed, treating as miss");
        }
    }

    match cache.lookup(root).await {
        Ok(Some(snapshot)) => {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "lookup" => "root").increment(1);
            debug!(url = %request.url, "serving root document fallback");
            Ok(snapshot.into_response())
        }
        Ok(None) => {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "lookup" => "root").increment(1);
            Err(network_err)
        }
        Err(e) => {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "lookup" => "root").increment(1);
            warn!(url = %request.url, error = %e, "root fallback lookup failed, treating as miss");
            Err(network_err)
        }
    }
}
