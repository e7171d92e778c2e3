//! Pooled-client capability and the per-proxy keyed client cache.

use crate::error::BoxError;
use crate::proxy::Proxy;

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Factory that builds a client configured for a given proxy.
///
/// Supplied by the embedding application at pool construction and/or per
/// proxy; the pool never constructs clients itself.
pub type ClientFactory<C> = Arc<dyn Fn(&Proxy<C>) -> Result<C, BoxError> + Send + Sync>;

/// Capability the pool requires of cached clients.
///
/// Clients are stored by value and handed out by clone, so implementors are
/// expected to be cheap handles (`reqwest::Client` is an `Arc` internally).
pub trait PoolClient: Clone + Send + Sync + 'static {
    /// Re-point the client's outbound proxy at a new target URL.
    ///
    /// Rotating proxies call this on every fetch so that upstream identity
    /// changes behind a stable gateway address are picked up without
    /// discarding the cached client. Returns `false` when the client cannot
    /// be re-targeted in place; the cache then rebuilds the entry through
    /// the factory instead.
    fn set_proxy_url(&self, _url: &str) -> bool {
        false
    }
}

// reqwest clients cannot change proxy after construction; rotating proxies
// fall back to rebuilding the cache entry.
impl PoolClient for reqwest::Client {}

/// Concurrent keyed cache of constructed clients for one proxy.
///
/// Keys are arbitrary caller-chosen strings (the default key is `""`),
/// allowing several logical users of the same proxy to hold independently
/// configured clients. Same-key races construct more than once and resolve
/// last-write-wins; duplicate construction is wasted work, not a
/// correctness problem.
pub struct ClientCache<C> {
    clients: RwLock<HashMap<String, C>>,
}

impl<C> ClientCache<C> {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.clients.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.read().is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.clients.read().contains_key(key)
    }

    pub fn insert(&self, key: &str, client: C) {
        self.clients.write().insert(key.to_string(), client);
    }
}

impl<C: Clone> ClientCache<C> {
    pub fn get(&self, key: &str) -> Option<C> {
        self.clients.read().get(key).cloned()
    }
}

impl<C> Default for ClientCache<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_by_key() {
        let cache = ClientCache::new();
        assert!(cache.is_empty());
        cache.insert("", 1u32);
        cache.insert("profile-a", 2u32);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(""), Some(1));
        assert_eq!(cache.get("profile-a"), Some(2));
        assert_eq!(cache.get("missing"), None);
    }

    #[test]
    fn same_key_overwrites() {
        let cache = ClientCache::new();
        cache.insert("k", 1u32);
        cache.insert("k", 2u32);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k"), Some(2));
    }
}
