//! `fm-ingest` — source-document ingestion for the `fleet_map` operational map.
//!
//! Turns a raw road-network export (an XML document of `node` and `way`
//! elements) into finite, display-ready geometry.  The three stages run in
//! strict dependency order per document:
//!
//! 1. [`parse_document`] — streaming XML parse into [`RawDocument`].
//! 2. [`resolve_nodes`] — id → coordinate table with local-metric fallback.
//! 3. [`assemble_ways`] — ordered polylines filtered against the table.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`document`] | `RawDocument`, `RawNode`, `RawWay`, `parse_document`|
//! | [`resolve`]  | `NodeTable`, `resolve_nodes`, `METERS_PER_DEGREE`   |
//! | [`ways`]     | `Way`, `assemble_ways`                              |
//! | [`error`]    | `IngestError`, `IngestResult<T>`                    |

pub mod document;
pub mod error;
pub mod resolve;
pub mod ways;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use document::{parse_document, RawDocument, RawNode, RawWay};
pub use error::{IngestError, IngestResult};
pub use resolve::{resolve_nodes, NodeTable, METERS_PER_DEGREE};
pub use ways::{assemble_ways, Way};
