//! Overlay projection: live poses → marker descriptors.
//!
//! A pure function of the snapshot and zoom level — no state, no side
//! effects.  The rendering widget draws whatever comes out; stacking order
//! within the output list is the z-order it should use.

use fm_core::{GeoPoint, Pose};

// ── Sizing constants ──────────────────────────────────────────────────────────

const CURRENT_MIN_PX:    f64 = 35.0;
const CURRENT_ZOOM_SCALE: f64 = 2.5;
const PIN_MIN_PX:        f64 = 18.0;
const PIN_ZOOM_SCALE:    f64 = 1.1;

/// Width-to-height ratio of the current-vehicle icon artwork.
const CURRENT_ASPECT: f64 = 0.7;

// ── Marker model ──────────────────────────────────────────────────────────────

/// Which icon a marker gets, and whether rotation applies to it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    /// A vehicle's current position — the rotated vehicle icon.
    Current,
    /// A vehicle's active goal — a plain pin.
    Goal,
    /// The operator's in-progress goal placement — a plain pin.
    SetGoal,
    /// Anything else a host overlays — a plain pin.
    Fallback,
}

/// One renderable overlay element.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position:     GeoPoint,
    pub kind:         MarkerKind,
    pub size_px:      u32,
    pub rotation_deg: f64,
    pub label:        String,
}

impl Marker {
    /// Icon box in pixels.  The vehicle artwork is wider than tall; pins are
    /// square.
    pub fn icon_size(&self) -> (u32, u32) {
        match self.kind {
            MarkerKind::Current => {
                (self.size_px, (self.size_px as f64 * CURRENT_ASPECT).floor() as u32)
            }
            _ => (self.size_px, self.size_px),
        }
    }

    /// Anchor point within the icon box: center for the vehicle icon, tip
    /// (bottom-center) for pins.
    pub fn icon_anchor(&self) -> (u32, u32) {
        let (w, h) = self.icon_size();
        match self.kind {
            MarkerKind::Current => (w / 2, h / 2),
            _ => (w / 2, h),
        }
    }
}

// ── Live-state snapshot ───────────────────────────────────────────────────────

/// One render pass worth of live state, pulled from the external feed.
#[derive(Debug, Clone, Default)]
pub struct LiveSnapshot {
    /// Current-vehicle poses.
    pub vehicles: Vec<Pose>,
    /// Active goal poses.
    pub goals: Vec<Pose>,
    /// The operator's in-progress goal placement, if any.
    pub set_goal: Option<Pose>,
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Current-vehicle icon size for a zoom level.
pub fn current_size_px(zoom: f64) -> u32 {
    CURRENT_MIN_PX.max((zoom * CURRENT_ZOOM_SCALE).round()) as u32
}

/// Pin icon size for a zoom level.
pub fn pin_size_px(zoom: f64) -> u32 {
    PIN_MIN_PX.max((zoom * PIN_ZOOM_SCALE).round()) as u32
}

/// Screen rotation for a vehicle heading.
///
/// Inverts the compass sense (headings grow clockwise, screen rotations
/// counter-clockwise) and adds 180° because the vehicle artwork faces down,
/// then normalizes into [0, 360).
pub fn current_rotation_deg(heading: f64) -> f64 {
    (360.0 - heading + 180.0).rem_euclid(360.0)
}

/// Project a live snapshot into marker descriptors.
///
/// Invalid poses yield no marker at all.  Output order — current vehicles,
/// then goals, then the set-goal marker — mirrors the stacking order the UI
/// expects.
pub fn project_markers(live: &LiveSnapshot, zoom: f64) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(live.vehicles.len() + live.goals.len() + 1);

    for pose in live.vehicles.iter().filter(|p| p.valid) {
        markers.push(Marker {
            position:     pose.position(),
            kind:         MarkerKind::Current,
            size_px:      current_size_px(zoom),
            rotation_deg: current_rotation_deg(pose.heading_deg()),
            label:        pose.scope.clone(),
        });
    }

    for pose in live.goals.iter().filter(|p| p.valid) {
        markers.push(Marker {
            position:     pose.position(),
            kind:         MarkerKind::Goal,
            size_px:      pin_size_px(zoom),
            rotation_deg: 0.0,
            label:        format!("Goal of {}", pose.scope),
        });
    }

    if let Some(pose) = live.set_goal.as_ref().filter(|p| p.valid) {
        markers.push(Marker {
            position:     pose.position(),
            kind:         MarkerKind::SetGoal,
            size_px:      pin_size_px(zoom),
            rotation_deg: 0.0,
            label:        "Goal Position".to_string(),
        });
    }

    markers
}
