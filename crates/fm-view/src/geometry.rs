//! Aggregate geometry derivations.
//!
//! Both functions are pure recomputations over the current tables — nothing
//! is cached across documents, so there is no staleness to manage.

use fm_core::{GeoPoint, Origin};
use fm_ingest::{NodeTable, Way};
use log::warn;

/// Arithmetic mean of all resolved node coordinates.
///
/// A document that resolves zero nodes has no meaningful center of its own;
/// the externally supplied origin (already coerced finite) stands in.
pub fn centroid(nodes: &NodeTable, fallback: Origin) -> GeoPoint {
    if nodes.is_empty() {
        warn!("no resolved nodes; using fallback center {}", fallback.as_point());
        return fallback.as_point();
    }

    let n = nodes.len() as f64;
    let (sum_lat, sum_lon) = nodes
        .values()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));
    GeoPoint::new(sum_lat / n, sum_lon / n)
}

/// Flattened set of all points across all ways.
///
/// The rendering widget computes its fit-to-view bound from this set.
pub fn bounding_points(ways: &[Way]) -> Vec<GeoPoint> {
    ways.iter().flat_map(|w| w.points.iter().copied()).collect()
}
