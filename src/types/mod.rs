//! Core value types shared across the agent.

pub mod manifest;
pub mod request;
pub mod response;

pub use manifest::Manifest;
pub use request::{FetchRequest, RequestKey};
pub use response::{FetchResponse, Snapshot};
