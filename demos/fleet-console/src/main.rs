//! fleet-console — end-to-end walkthrough of the fleet_map pipeline.
//!
//! Plays the roles the real deployment splits across the browser shell and
//! the fleet services: it "fetches" an embedded source document, drives the
//! ingestion controller, projects a live snapshot into markers, and walks
//! the source-switch protocol against canned service payloads.  Everything
//! prints to stdout; run with `cargo run -p fleet-console`.

use std::io;

use anyhow::{anyhow, Result};
use log::info;
use structured_logger::json::new_writer;
use structured_logger::Builder;

use fm_core::{GeoPoint, Pose};
use fm_view::{IngestOutcome, LiveSnapshot, MapObserver, MapView, ViewConfig};
use fm_source::SourceSwitcher;

// ── Canned transport payloads ─────────────────────────────────────────────────

/// A small site export: three direct nodes, one local-metric node, two ways.
const SITE_A_DOCUMENT: &str = r#"<osm>
  <node id="1" lat="35.2380" lon="139.9009"/>
  <node id="2" lat="35.2384" lon="139.9013"/>
  <node id="3" lat="35.2388" lon="139.9009"/>
  <node id="4">
    <tag k="local_x" v="55.6"/>
    <tag k="local_y" v="-111.3"/>
  </node>
  <way><nd ref="1"/><nd ref="2"/><nd ref="3"/></way>
  <way><nd ref="3"/><nd ref="4"/></way>
</osm>"#;

const CATALOG_JSON: &str = r#"{
  "maps": {
    "site_a": { "name": "Site A", "description": "Harbor loop course" },
    "town01": { "name": "Town 01", "description": "Simulator town" }
  },
  "current_map": "site_a"
}"#;

const CATALOG_AFTER_SWITCH_JSON: &str = r#"{
  "maps": {
    "site_a": { "name": "Site A", "description": "Harbor loop course" },
    "town01": { "name": "Town 01", "description": "Simulator town" }
  },
  "current_map": "town01"
}"#;

const SWITCH_OK_JSON: &str = r#"{ "success": true }"#;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints interactions the rendering widget would report back.
struct ConsoleObserver;

impl MapObserver for ConsoleObserver {
    fn on_map_click(&mut self, at: GeoPoint) {
        println!("  click at {at}");
    }
    fn on_zoom_changed(&mut self, zoom: f64) {
        println!("  zoom is now {zoom}");
    }
}

// ── Walkthrough ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    Builder::with_level("debug")
        .with_target_writer("*", new_writer(io::stdout()))
        .init();

    let config_json = r#"{ "origin": { "lat": 35.2380, "lon": 139.9009 }, "initial_zoom": 18.0 }"#;
    let config: ViewConfig = serde_json::from_str(config_json)?;
    let mut view = MapView::new(config, ConsoleObserver);

    // ── Document ingestion ────────────────────────────────────────────────
    println!("== ingesting site_a ==");
    let req = view.begin_load("/maps/site_a/lanelet2_map.osm");
    info!(session = req.session.to_string(), url = req.url.as_str(); "transport fetch");

    match view.on_document(req.session, Ok(SITE_A_DOCUMENT.to_string())) {
        IngestOutcome::Applied(stats) => {
            println!("  {} nodes, {} ways", stats.nodes, stats.ways)
        }
        other => return Err(anyhow!("ingestion did not apply: {other:?}")),
    }

    println!("  centroid {}", view.centroid());
    if let Some(bounds) = view.bounds() {
        println!("  bounds {} .. {}", bounds.south_west(), bounds.north_east());
    }
    if let Some(fit) = view.take_fit_points() {
        println!("  fit viewport to {} points (once per document)", fit.len());
    }
    assert!(view.take_fit_points().is_none());

    // ── Widget interactions ───────────────────────────────────────────────
    println!("== widget interactions ==");
    view.notify_zoom(20.0);
    view.notify_click(GeoPoint::new(35.2384, 139.9013));

    // ── Overlay projection ────────────────────────────────────────────────
    println!("== markers ==");
    let live = LiveSnapshot {
        vehicles: vec![
            Pose::new("v1", 35.2381, 139.9010, Some(90.0)),
            Pose::new("v2", 35.2386, 139.9011, Some(270.0)),
            Pose::invalid("v3"), // discovered but not yet localized
        ],
        goals:    vec![Pose::new("v1", 35.2388, 139.9009, None)],
        set_goal: Some(Pose::new("operator", 35.2384, 139.9013, None)),
    };
    for marker in view.render_markers(&live) {
        let (w, h) = marker.icon_size();
        println!(
            "  {:?} '{}' at {} {}x{}px rot {}",
            marker.kind, marker.label, marker.position, w, h, marker.rotation_deg
        );
    }

    // ── Source switching ──────────────────────────────────────────────────
    println!("== switching to town01 ==");
    let mut switcher = SourceSwitcher::new();
    let _req = switcher.refresh_catalog()?;
    switcher.on_catalog(Ok(CATALOG_JSON))?;
    for source in switcher.catalog().iter() {
        println!("  available: {} — {}", source.name, source.description);
    }

    let req = switcher
        .begin_switch("town01")?
        .ok_or_else(|| anyhow!("town01 unexpectedly active already"))?;
    info!(key = req.key.as_str(); "transport switch request");

    let accepted = switcher.on_switch_response(Ok(SWITCH_OK_JSON))?;
    println!("  active is now '{}'", switcher.catalog().active());

    // The real shell re-ingests under the new source here, then waits
    // `accepted.refresh_delay_ms` before the reconciling refresh.
    println!("  reconciling after {} ms", accepted.refresh_delay_ms);
    let _req = switcher.refresh_due()?;
    switcher.on_catalog(Ok(CATALOG_AFTER_SWITCH_JSON))?;
    println!("  reconciled; active '{}'", switcher.catalog().active());

    Ok(())
}
