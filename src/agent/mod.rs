//! The request-handling agent and its lifecycle.

mod builder;
mod control;
pub mod routing;
mod service;
mod strategy;

pub use builder::{Vordr, VordrBuilder};
pub use control::{HostControl, NoopControl};
pub use routing::{RequestRouter, Route};
pub use service::ServiceAgent;
