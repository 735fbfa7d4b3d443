//! Telemetry metric name constants.
//!
//! Centralised metric names for vordr operations. Consumers install their
//! own `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `vordr_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `route` — routing decision: "bypass" or "cache"
//! - `status` — outcome: "ok" or "error"
//! - `lookup` — which fallback identity was consulted: "entry" or "root"

/// Total requests handled by the agent.
///
/// Labels: `route` ("bypass" | "cache"), `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "vordr_requests_total";

/// Total cache lookups that found a stored snapshot.
///
/// Labels: `lookup` ("entry" | "root").
pub const CACHE_HITS_TOTAL: &str = "vordr_cache_hits_total";

/// Total cache lookups that found nothing.
///
/// Labels: `lookup` ("entry" | "root").
pub const CACHE_MISSES_TOTAL: &str = "vordr_cache_misses_total";

/// Total snapshot writes that failed after a successful fetch.
///
/// These are tolerated (the response is still delivered); the counter is
/// the only place the failure is visible beyond a debug log.
pub const WRITE_FAILURES_TOTAL: &str = "vordr_write_failures_total";

/// Total shell resources skipped during preload (unreachable or non-2xx).
pub const PRELOAD_SKIPS_TOTAL: &str = "vordr_preload_skips_total";

/// Total stale generations deleted during activation.
pub const GENERATIONS_PRUNED_TOTAL: &str = "vordr_generations_pruned_total";
