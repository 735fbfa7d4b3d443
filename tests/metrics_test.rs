//! Tests for telemetry counters emitted by the agent.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use vordr::{
    CacheStore, FetchRequest, FetchResponse, MemoryStore, RequestKey, Result, ServiceAgent, Vordr,
    VordrError,
};

/// Network serving a URL → response table; anything else is unreachable.
#[derive(Default)]
struct MockNetwork {
    routes: HashMap<String, FetchResponse>,
}

impl MockNetwork {
    fn route(mut self, url: &str, response: FetchResponse) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }
}

#[async_trait]
impl vordr::Network for MockNetwork {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse> {
        self.routes
            .get(request.url.as_str())
            .cloned()
            .ok_or_else(|| VordrError::Network("offline".into()))
    }
}

const ORIGIN: &str = "https://app.example";

fn agent(network: MockNetwork, store: Arc<MemoryStore>) -> ServiceAgent {
    Vordr::builder()
        .generation("v1")
        .origin(ORIGIN)
        .store(store)
        .network(Arc::new(network))
        .build()
        .unwrap()
}

fn get(path: &str) -> FetchRequest {
    FetchRequest::get(format!("{ORIGIN}{path}").parse().unwrap())
}

#[tokio::test]
async fn metrics_emitted_without_panic() {
    // Without a metrics recorder installed, all metric calls are no-ops
    let store = Arc::new(MemoryStore::default());
    let agent = agent(
        MockNetwork::default().route(&format!("{ORIGIN}/page"), FetchResponse::ok(b"ok".to_vec())),
        store,
    );

    agent.on_install().await.unwrap();
    agent.on_activate().await.unwrap();
    agent.on_request(get("/page")).await.unwrap();
    let _ = agent.on_request(get("/unreachable")).await;
}

/// Runs async agent operations within a local recorder scope.
///
/// Uses `block_in_place` + `block_on` pattern to keep `with_local_recorder`
/// on the same thread (it's a thread-local recorder).
#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn offline_fallback_counts_hits_and_misses() {
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::MetricKind;

    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let store = Arc::new(MemoryStore::default());
                let cache = store.open("v1").await.unwrap();
                cache
                    .put(
                        RequestKey::get(&format!("{ORIGIN}/page").parse().unwrap()),
                        FetchResponse::ok(b"cached".to_vec()).snapshot(),
                    )
                    .await
                    .unwrap();

                let agent = agent(MockNetwork::default(), store);

                // Offline hit for /page, total miss for /other
                agent.on_request(get("/page")).await.unwrap();
                let _ = agent.on_request(get("/other")).await;
            })
        })
    });

    let snapshot = snapshotter.snapshot().into_vec();

    let count = |name: &str| -> u64 {
        snapshot
            .iter()
            .filter(|(key, _, _, _)| {
                key.kind() == MetricKind::Counter && key.key().name() == name
            })
            .map(|(_, _, _, val)| match val {
                DebugValue::Counter(c) => *c,
                _ => 0,
            })
            .sum()
    };

    // /page: entry hit. /other: entry miss + root miss.
    assert_eq!(count("vordr_cache_hits_total"), 1, "expected 1 cache hit");
    assert_eq!(count("vordr_cache_misses_total"), 2, "expected 2 cache misses");
    // Both requests were routed to the cache strategy
    assert_eq!(count("vordr_requests_total"), 2, "expected 2 requests");
}
