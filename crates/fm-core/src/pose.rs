//! Live vehicle and goal state.

use crate::GeoPoint;

/// A vehicle's (or goal's) position and orientation as reported by the live
/// state feed.
///
/// Poses are per-render-pass snapshots: the map core reads them while
/// projecting markers and never stores them beyond that pass.  A pose with
/// `valid = false` must never be rendered — the feed uses the flag to report
/// vehicles it knows about but has no position for yet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub lat: f64,
    pub lon: f64,

    /// Heading in degrees, 0–360 clockwise from north.  `None` when the feed
    /// has no orientation estimate; treated as 0.
    pub heading: Option<f64>,

    pub valid: bool,

    /// Identifier of the vehicle this pose belongs to.  Used as the marker
    /// label for interactive identification.
    pub scope: String,
}

impl Pose {
    /// A valid pose at `(lat, lon)` for vehicle `scope`.
    pub fn new(scope: impl Into<String>, lat: f64, lon: f64, heading: Option<f64>) -> Self {
        Self { lat, lon, heading, valid: true, scope: scope.into() }
    }

    /// An invalid placeholder pose for `scope` (renders nothing).
    pub fn invalid(scope: impl Into<String>) -> Self {
        Self { lat: 0.0, lon: 0.0, heading: None, valid: false, scope: scope.into() }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Heading with the absent-defaults-to-zero rule applied.
    #[inline]
    pub fn heading_deg(&self) -> f64 {
        self.heading.unwrap_or(0.0)
    }
}
