//! Vordr - offline-resilience request agent
//!
//! This crate interposes a caching agent between an application and the
//! network. For every intercepted request the agent decides whether to
//! serve from a durable generation-scoped store, fetch live, or refuse,
//! and it maintains the store's lifecycle across application deployments:
//! installation preloads the application shell, activation prunes the
//! caches of superseded versions, and steady-state requests run a
//! network-first strategy with cache fallback.
//!
//! The network and the store are opaque capabilities behind the
//! [`Network`] and [`CacheStore`] traits; the bundled implementations are
//! a reqwest-backed [`HttpNetwork`] and a moka-backed [`MemoryStore`].
//!
//! # Example
//!
//! ```rust,no_run
//! use vordr::{FetchRequest, Vordr};
//!
//! #[tokio::main]
//! async fn main() -> vordr::Result<()> {
//!     let agent = Vordr::builder()
//!         .generation("shell-v2")
//!         .origin("https://app.example")
//!         .manifest(["/", "/index.html", "/logo.svg", "/manifest.json"])
//!         .build()?;
//!
//!     // Host lifecycle: install once per deployment, then activate.
//!     agent.on_install().await?;
//!     agent.on_activate().await?;
//!
//!     // Steady state: every intercepted request goes through the agent.
//!     let response = agent
//!         .on_request(FetchRequest::get("https://app.example/index.html".parse()?))
//!         .await?;
//!     println!("{} ({} bytes)", response.status, response.body.len());
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod error;
pub mod net;
pub mod store;
pub mod telemetry;
pub mod types;

// Re-export main types at crate root
pub use agent::{HostControl, NoopControl, RequestRouter, Route, ServiceAgent, Vordr, VordrBuilder};
pub use error::{Result, VordrError};
pub use net::{HttpNetwork, Network};
pub use store::{CacheHandle, CacheStore, MemoryStore, StoreConfig};
pub use types::{FetchRequest, FetchResponse, Manifest, RequestKey, Snapshot};
