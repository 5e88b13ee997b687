pub mod client;
pub mod config;
pub mod prompt;

pub use client::ChatClient;
pub use config::OracleConfig;
pub use prompt::{Message, Prompt, Role};

use anyhow::Result;

/// Capability interface over the completion service. Components depend on
/// this trait rather than a concrete vendor client, so tests can substitute
/// deterministic stubs.
#[allow(async_fn_in_trait)]
pub trait TextOracle {
    /// One completion round-trip. Transport and oracle-side failures
    /// propagate to the caller; there is no retry or backoff.
    async fn complete(&self, prompt: &Prompt) -> Result<String>;
}
