//! Pool configuration.

use crate::provider::Provider;

use std::sync::Arc;

/// Options controlling a [`crate::pool::ProxStore`].
#[derive(Debug, Clone, Default)]
pub struct PoolOptions {
    /// Whether an empty pool falls back to the direct (no-proxy) sentinel.
    pub allow_direct: bool,
    /// Default provider used by session release when a proxy carries none.
    pub provider: Option<Arc<Provider>>,
    /// Seed for the pool-owned random source. Leave unset outside tests.
    pub rng_seed: Option<u64>,
}

impl PoolOptions {
    /// Create a new options builder.
    pub fn builder() -> PoolOptionsBuilder {
        PoolOptionsBuilder::new()
    }
}

/// Builder for `PoolOptions`.
pub struct PoolOptionsBuilder {
    allow_direct: bool,
    provider: Option<Arc<Provider>>,
    rng_seed: Option<u64>,
}

impl PoolOptionsBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            allow_direct: false,
            provider: None,
            rng_seed: None,
        }
    }

    /// Allow direct connections when no proxies are loaded.
    pub fn allow_direct(mut self, allow: bool) -> Self {
        self.allow_direct = allow;
        self
    }

    /// Set the default provider for session release.
    pub fn provider(mut self, provider: Arc<Provider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Seed the pool's random source for reproducible selection.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the options.
    pub fn build(self) -> PoolOptions {
        PoolOptions {
            allow_direct: self.allow_direct,
            provider: self.provider,
            rng_seed: self.rng_seed,
        }
    }
}

impl Default for PoolOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
