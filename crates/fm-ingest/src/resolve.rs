//! Node resolution: id → finite coordinate table.

use fm_core::{GeoPoint, Origin};
use log::debug;
use rustc_hash::FxHashMap;

use crate::document::{parse_coord, RawDocument, RawNode};

/// Resolved node table.  Invariant: every stored point is finite; ids that
/// could not be resolved are absent, never stored as placeholders.
pub type NodeTable = FxHashMap<String, GeoPoint>;

/// Linearization constant for the local-metric fallback: metres per degree
/// of latitude (and, uncorrected, of longitude).
///
/// The longitude term ignores the cosine-of-latitude scale factor, so error
/// grows with distance from the origin and with latitude.  This matches the
/// site exports the system consumes and is a documented approximation, not a
/// defect — do not "fix" it without revisiting every stored origin.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Build the id → coordinate table for one document.
///
/// Per node, in order of preference:
///
/// 1. direct `lat`/`lon` attributes, when both parsed finite;
/// 2. `local_x`/`local_y` tags linearized around `origin`;
/// 3. neither → the node is omitted.
///
/// Omission is silent by design: partial exports are normal, and a missing
/// node only thins the ways that reference it.
pub fn resolve_nodes(doc: &RawDocument, origin: Origin) -> NodeTable {
    let mut table = NodeTable::default();
    let mut from_local = 0usize;

    for node in &doc.nodes {
        // Direct coordinates are already finite-filtered by the parser.
        let mut point = node.lat.zip(node.lon).map(|(lat, lon)| GeoPoint::new(lat, lon));
        if point.is_none() {
            point = local_fallback(node, origin);
            if point.is_some() {
                from_local += 1;
            }
        }

        match point {
            Some(p) => {
                table.insert(node.id.clone(), p);
            }
            None => debug!("node {} has no usable coordinates; omitted", node.id),
        }
    }

    debug!(
        "resolved {} of {} nodes ({} via local fallback)",
        table.len(),
        doc.nodes.len(),
        from_local
    );
    table
}

/// Convert `local_x`/`local_y` tags to geographic coordinates around `origin`.
fn local_fallback(node: &RawNode, origin: Origin) -> Option<GeoPoint> {
    let x = node.tags.get("local_x").and_then(|v| parse_coord(v))?;
    let y = node.tags.get("local_y").and_then(|v| parse_coord(v))?;
    Some(GeoPoint::new(
        origin.lat + y / METERS_PER_DEGREE,
        origin.lon + x / METERS_PER_DEGREE,
    ))
}
