//! # proxstore
//!
//! A concurrency-safe pool of upstream proxies with lazy, per-proxy pooled
//! clients.
//!
//! Proxies are parsed from text lines (with or without an explicit
//! `scheme://` prefix), keyed by their canonical string form and selected
//! round-robin, randomly or by index. Each proxy carries a keyed cache of
//! network clients built on demand through an injected factory, and an
//! optional provider reference used to release leased sessions upstream.
//!
//! The pool never constructs network clients itself and imposes no timeout
//! or retry policy; both belong to the embedding application.

pub mod client;
pub mod config;
pub mod error;
pub mod parse;
pub mod pool;
pub mod protocol;
pub mod provider;
pub mod proxy;

pub use client::{ClientFactory, PoolClient};
pub use config::{PoolOptions, PoolOptionsBuilder};
pub use error::{BoxError, Error};
pub use pool::ProxStore;
pub use protocol::Protocol;
pub use provider::{Provider, ProviderName, ReleaseData, Service};
pub use proxy::Proxy;
