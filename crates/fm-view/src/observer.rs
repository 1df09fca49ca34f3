//! Observer seam for widget interactions.

use fm_core::GeoPoint;

/// Callbacks for user interactions the rendering widget reports back.
///
/// The map core does not process these further — they are forwarded to
/// whatever owns the live-state feed (e.g. to place a set-goal pose at a
/// clicked coordinate).  Both methods have default no-op implementations so
/// implementors only need to override what they care about.
///
/// # Example — click logger
///
/// ```rust,ignore
/// struct ClickLogger;
///
/// impl MapObserver for ClickLogger {
///     fn on_map_click(&mut self, at: GeoPoint) {
///         println!("clicked {at}");
///     }
/// }
/// ```
pub trait MapObserver {
    /// Called when the user clicks the map, with the geographic coordinate
    /// under the cursor.
    fn on_map_click(&mut self, _at: GeoPoint) {}

    /// Called when the widget's zoom level changes (already clamped to the
    /// configured bounds).
    fn on_zoom_changed(&mut self, _zoom: f64) {}
}

/// A [`MapObserver`] that does nothing.  Use when no interaction handling is
/// needed.
pub struct NoopObserver;

impl MapObserver for NoopObserver {}
