//! Versioned ingestion sessions.
//!
//! Every document load gets a fresh [`SessionId`].  Completions are matched
//! against the pending id and discarded when stale, which is what makes
//! last-request-wins correct without any cancellation machinery: a
//! superseded fetch may still resolve, but its result can no longer be
//! applied.

use fm_ingest::{NodeTable, Way};

/// Identifier of one document-load attempt.  Monotonically increasing within
/// a [`MapView`][crate::MapView].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

/// Instruction to the external transport: fetch `url` and deliver the result
/// to [`MapView::on_document`][crate::MapView::on_document] with `session`.
///
/// `bypass_cache` is always set — every load must observe the freshest
/// bytes, not a cached prior version of the document.  The transport decides
/// how to honor it (cache-control headers, a cache-busting query parameter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub session:      SessionId,
    pub url:          String,
    pub bypass_cache: bool,
}

// ── Internal session state ────────────────────────────────────────────────────

/// A load handed to the transport but not yet completed.
pub(crate) struct PendingLoad {
    pub id:  SessionId,
    pub url: String,
}

/// The displayed state of the most recently ingested document.
///
/// Rebuilt wholesale on every successful ingestion — node and way tables are
/// never mutated incrementally across documents.  `has_fit` is the one-shot
/// auto-fit flag: written once per document, read-guarded so marker and pose
/// updates can never re-trigger an automatic viewport change.
pub(crate) struct IngestSession {
    pub id:      SessionId,
    pub nodes:   NodeTable,
    pub ways:    Vec<Way>,
    pub has_fit: bool,
}

impl IngestSession {
    /// State before any document has been ingested.
    pub fn empty() -> Self {
        Self {
            id:      SessionId(0),
            nodes:   NodeTable::default(),
            ways:    Vec::new(),
            has_fit: false,
        }
    }
}
