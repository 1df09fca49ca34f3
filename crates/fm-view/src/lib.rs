//! `fm-view` — the map view controller for `fleet_map`.
//!
//! Owns the per-document ingestion session, derives view parameters
//! (centroid, fit bound) from the ingested geometry, and projects live
//! vehicle state into marker descriptors for the external rendering widget.
//!
//! The widget itself (tiles, pan/zoom, drawing primitives) is an external
//! collaborator: it receives ways, a one-shot fit bound, and markers from
//! [`MapView`], and feeds clicks and zoom changes back through the
//! [`MapObserver`] seam.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`config`]   | `ViewConfig` — origin and zoom bounds                 |
//! | [`observer`] | `MapObserver` trait, `NoopObserver`                   |
//! | [`session`]  | `SessionId`, `FetchRequest` — versioned load protocol |
//! | [`geometry`] | Centroid and bounding-set derivations                 |
//! | [`overlay`]  | `Marker`, `MarkerKind`, `project_markers`             |
//! | [`view`]     | `MapView` — the controller tying it all together      |

pub mod config;
pub mod geometry;
pub mod observer;
pub mod overlay;
pub mod session;
pub mod view;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::ViewConfig;
pub use observer::{MapObserver, NoopObserver};
pub use overlay::{project_markers, LiveSnapshot, Marker, MarkerKind};
pub use session::{FetchRequest, SessionId};
pub use view::{DocumentStats, IngestOutcome, MapView};
