//! Proxy module
//!
//! Resolves provider names and forwards the caller's key upstream.

pub mod client;
pub mod headers;
pub mod logging;
pub mod provider;
pub mod registry;

pub use client::ProviderClient;
pub use provider::ProviderFetcher;
pub use registry::{Provider, ProviderRegistry};
