//! Way assembly: ordered node references → filtered polylines.

use fm_core::GeoPoint;
use log::debug;

use crate::document::RawDocument;
use crate::resolve::NodeTable;

/// An assembled polyline.  Invariant: at least 2 points, all finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    pub points: Vec<GeoPoint>,
}

/// Resolve every way's references against `nodes`, preserving order.
///
/// Unresolved references are dropped in place (no reordering, no
/// substitution); a way left with fewer than 2 points is discarded entirely
/// rather than emitted as a degenerate single-point shape.  Output order
/// mirrors source-document order.
pub fn assemble_ways(doc: &RawDocument, nodes: &NodeTable) -> Vec<Way> {
    let mut ways = Vec::with_capacity(doc.ways.len());
    let mut dropped = 0usize;

    for raw in &doc.ways {
        let points: Vec<GeoPoint> = raw
            .refs
            .iter()
            .filter_map(|r| nodes.get(r).copied())
            .collect();

        if points.len() >= 2 {
            ways.push(Way { points });
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        debug!("dropped {dropped} ways with fewer than 2 resolvable points");
    }
    ways
}
