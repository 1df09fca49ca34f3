//! View configuration supplied by the embedding shell.

use fm_core::Origin;
use serde::Deserialize;

/// Static parameters of one map view.
///
/// `origin` feeds the local-metric fallback conversion during node
/// resolution and is the centroid fallback when a document resolves zero
/// nodes.  The zoom bounds are forwarded to the rendering widget and used to
/// clamp zoom levels it reports back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub origin:       Origin,
    pub initial_zoom: f64,
    pub min_zoom:     f64,
    pub max_zoom:     f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            origin:       Origin::default(),
            initial_zoom: 1.0,
            min_zoom:     1.0,
            max_zoom:     22.0,
        }
    }
}
