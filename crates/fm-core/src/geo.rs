//! Geographic coordinate types.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Coordinates surface directly in
//! the operator UI and feed viewport maths downstream, so full double
//! precision is kept end to end rather than the `f32` a simulation core could
//! get away with.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when both components are finite numbers.
    ///
    /// Every point stored in a resolved node table or an assembled way must
    /// satisfy this; callers holding a `GeoPoint` from those paths may rely
    /// on it without re-checking.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Origin ────────────────────────────────────────────────────────────────────

/// Reference point for the local-metric fallback conversion.
///
/// Supplied by the embedding shell (it knows which site the map describes).
/// Construction coerces each non-finite component to `0.0`, so an `Origin`
/// is always safe to do arithmetic against.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Origin {
    pub lat: f64,
    pub lon: f64,
}

impl Origin {
    /// Build an origin, replacing NaN/infinite components with `0.0`.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: if lat.is_finite() { lat } else { 0.0 },
            lon: if lon.is_finite() { lon } else { 0.0 },
        }
    }

    #[inline]
    pub fn as_point(self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

// ── GeoBounds ─────────────────────────────────────────────────────────────────

/// Axis-aligned lat/lon bounding box.
///
/// The typed form of the flattened point set handed to the rendering widget
/// for its fit-to-view computation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Bounds of a point set, or `None` for an empty set.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min_lat: first.lat,
            min_lon: first.lon,
            max_lat: first.lat,
            max_lon: first.lon,
        };
        for p in iter {
            bounds.extend(p);
        }
        Some(bounds)
    }

    /// Grow the bounds to include `p`.
    pub fn extend(&mut self, p: GeoPoint) {
        self.min_lat = self.min_lat.min(p.lat);
        self.min_lon = self.min_lon.min(p.lon);
        self.max_lat = self.max_lat.max(p.lat);
        self.max_lon = self.max_lon.max(p.lon);
    }

    /// South-west corner.
    #[inline]
    pub fn south_west(self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.min_lon)
    }

    /// North-east corner.
    #[inline]
    pub fn north_east(self) -> GeoPoint {
        GeoPoint::new(self.max_lat, self.max_lon)
    }
}
