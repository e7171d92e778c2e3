//! Error types for the proxstore crate.

use thiserror::Error;

/// Boxed error type returned by client factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while parsing proxy lines, loading the pool, building
/// clients or releasing provider sessions.
#[derive(Debug, Error)]
pub enum Error {
    /// The input line is malformed: too few segments, unparseable port, or
    /// the resulting proxy is empty.
    #[error("invalid proxy line")]
    InvalidProxyLine,

    /// A scheme was present but did not resolve to a known protocol.
    #[error("invalid protocol")]
    InvalidProtocol,

    /// The injected client factory returned an error.
    #[error("failed to create client")]
    ClientConstruction(#[source] BoxError),

    /// The provider release request could not be built or sent. A non-200
    /// response is not an error; it is reported as `Ok(false)`.
    #[error("provider release request failed")]
    ProviderRelease(#[source] reqwest::Error),
}
