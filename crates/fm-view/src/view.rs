//! The `MapView` controller.
//!
//! Single owner of the ingestion session and the glue between the external
//! transport, the ingestion stages, and the rendering widget.  Everything is
//! callback-driven: the host hands fetch completions in, the controller
//! hands geometry and markers out.

use fm_core::{GeoBounds, GeoPoint};
use fm_ingest::{assemble_ways, parse_document, resolve_nodes, IngestError, Way};
use log::{error, info, warn};

use crate::config::ViewConfig;
use crate::geometry;
use crate::observer::MapObserver;
use crate::overlay::{self, LiveSnapshot, Marker};
use crate::session::{FetchRequest, IngestSession, PendingLoad, SessionId};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Aggregate counts from one successful ingestion, for diagnostics and UI.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DocumentStats {
    pub nodes: usize,
    pub ways:  usize,
}

/// What happened to one document completion.
#[derive(Debug)]
pub enum IngestOutcome {
    /// New geometry is displayed.
    Applied(DocumentStats),
    /// The completion belonged to a superseded load and was discarded; the
    /// displayed geometry is untouched.
    Stale(SessionId),
    /// Fetch or parse failed.  The previously displayed geometry remains;
    /// no partial geometry is ever shown.
    Failed(IngestError),
}

// ── MapView ───────────────────────────────────────────────────────────────────

/// The map view controller.
///
/// # Load protocol
///
/// ```rust,ignore
/// let req = view.begin_load("/maps/site_a/lanelet2_map.osm");
/// // … transport fetches req.url (bypassing caches) …
/// match view.on_document(req.session, Ok(body)) {
///     IngestOutcome::Applied(stats) => { /* redraw; view.take_fit_points() */ }
///     IngestOutcome::Stale(_) => { /* a newer load superseded this one */ }
///     IngestOutcome::Failed(err) => { /* surface err; keep prior display */ }
/// }
/// ```
///
/// A second `begin_load` before the first completes supersedes it: the older
/// completion will be reported [`IngestOutcome::Stale`] and ignored.
pub struct MapView<O: MapObserver> {
    config:       ViewConfig,
    observer:     O,
    zoom:         f64,
    next_session: u64,
    pending:      Option<PendingLoad>,
    session:      IngestSession,
}

impl<O: MapObserver> MapView<O> {
    pub fn new(config: ViewConfig, observer: O) -> Self {
        let zoom = config.initial_zoom;
        Self {
            config,
            observer,
            zoom,
            next_session: 0,
            pending: None,
            session: IngestSession::empty(),
        }
    }

    // ── Document loading ──────────────────────────────────────────────────

    /// Start loading a new source document, superseding any in-flight load.
    ///
    /// Returns the request the transport must perform.
    pub fn begin_load(&mut self, url: &str) -> FetchRequest {
        self.next_session += 1;
        let id = SessionId(self.next_session);

        if let Some(prev) = self.pending.replace(PendingLoad { id, url: url.to_string() }) {
            warn!("load {} for {} superseded by {id}", prev.id, prev.url);
        }
        info!("loading source document {url} as {id}");

        FetchRequest { session: id, url: url.to_string(), bypass_cache: true }
    }

    /// Deliver a fetch completion.
    ///
    /// Runs the ingestion stages in strict order — resolve nodes, assemble
    /// ways — and replaces the displayed tables wholesale on success.
    pub fn on_document(
        &mut self,
        session: SessionId,
        result: Result<String, String>,
    ) -> IngestOutcome {
        match &self.pending {
            Some(p) if p.id == session => {}
            _ => {
                warn!("discarding stale document completion for {session}");
                return IngestOutcome::Stale(session);
            }
        }
        self.pending = None;

        let text = match result {
            Ok(text) => text,
            Err(detail) => {
                let err = IngestError::Fetch(detail);
                error!("{err}");
                return IngestOutcome::Failed(err);
            }
        };

        let doc = match parse_document(&text) {
            Ok(doc) => doc,
            Err(err) => {
                error!("{err}");
                return IngestOutcome::Failed(err);
            }
        };

        let nodes = resolve_nodes(&doc, self.config.origin);
        let ways = assemble_ways(&doc, &nodes);
        let stats = DocumentStats { nodes: nodes.len(), ways: ways.len() };
        info!("{session} ingested: {} nodes, {} ways", stats.nodes, stats.ways);

        self.session = IngestSession { id: session, nodes, ways, has_fit: false };
        IngestOutcome::Applied(stats)
    }

    // ── Rendering collaborator contract ───────────────────────────────────

    /// The polylines to draw, in source-document order.
    pub fn ways(&self) -> &[Way] {
        &self.session.ways
    }

    /// Center of the displayed document: mean of all resolved nodes, or the
    /// configured origin when none resolved.
    pub fn centroid(&self) -> GeoPoint {
        geometry::centroid(&self.session.nodes, self.config.origin)
    }

    /// Bounding box of the displayed ways, if any.  Non-consuming; for UI
    /// display rather than viewport control.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(geometry::bounding_points(&self.session.ways))
    }

    /// The point set to fit the viewport to — yielded **at most once per
    /// ingested document**, so marker and pose updates can never re-trigger
    /// an automatic viewport change.  `None` when already taken or when the
    /// document has no ways.
    pub fn take_fit_points(&mut self) -> Option<Vec<GeoPoint>> {
        if self.session.has_fit || self.session.ways.is_empty() {
            return None;
        }
        self.session.has_fit = true;
        Some(geometry::bounding_points(&self.session.ways))
    }

    /// Project a live snapshot into markers at the current zoom level.
    pub fn render_markers(&self, live: &LiveSnapshot) -> Vec<Marker> {
        overlay::project_markers(live, self.zoom)
    }

    // ── Widget interaction forwarding ─────────────────────────────────────

    /// Forward a map click from the widget to the observer.
    pub fn notify_click(&mut self, at: GeoPoint) {
        self.observer.on_map_click(at);
    }

    /// Record a zoom change from the widget and forward it.  The stored
    /// level is clamped to the configured zoom bounds.
    pub fn notify_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        self.observer.on_zoom_changed(self.zoom);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Session id of the currently displayed document (`SessionId(0)` until
    /// the first successful ingestion).
    pub fn current_session(&self) -> SessionId {
        self.session.id
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
