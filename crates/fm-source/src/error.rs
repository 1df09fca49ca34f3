//! Source-subsystem error type.

use thiserror::Error;

/// Errors produced by `fm-source`.
///
/// All variants are user-surfaceable and recoverable by retrying the
/// operation; none leaves the catalog partially applied.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A catalog fetch or switch is already in flight.  The UI disables
    /// input during these states, so concurrent requests are rejected
    /// rather than queued.
    #[error("another catalog operation is already in flight")]
    Busy,

    #[error("failed to fetch map catalog: {0}")]
    Catalog(String),

    #[error("failed to switch map: {0}")]
    Switch(String),

    #[error("malformed service response: {0}")]
    Payload(#[from] serde_json::Error),

    /// A completion was delivered in a state with no matching request.
    #[error("no matching request in flight")]
    NoRequestInFlight,
}

pub type SourceResult<T> = Result<T, SourceError>;
