//! Ingestion-subsystem error type.

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors produced by `fm-ingest`.
///
/// Only document-level failures appear here.  Per-node resolution gaps and
/// degenerate ways are not errors — they are silently omitted, with counts
/// reported at `debug!` level.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Transport failure retrieving the source document.  The prior valid
    /// geometry remains displayed; the load may be retried.
    #[error("failed to fetch source document: {0}")]
    Fetch(String),

    /// The document could not be parsed at all.
    #[error("malformed source document: {0}")]
    Parse(String),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attr(#[from] AttrError),
}

pub type IngestResult<T> = Result<T, IngestError>;
