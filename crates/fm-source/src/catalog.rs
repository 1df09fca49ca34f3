//! The catalog of selectable map sources.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::SourceResult;

/// Active key before the first successful catalog fetch.
pub const UNKNOWN_SOURCE: &str = "unknown";

/// One selectable map source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSourceDescriptor {
    pub key:         String,
    pub name:        String,
    pub description: String,
}

/// All selectable map sources plus which one is currently active.
///
/// Owned and mutated exclusively by [`SourceSwitcher`][crate::SourceSwitcher]
/// — the catalog only changes on a successful catalog fetch or a confirmed
/// switch, never partially.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapCatalog {
    // BTreeMap for a stable listing order in the selection UI.
    sources: BTreeMap<String, MapSourceDescriptor>,
    active:  String,
}

impl Default for MapCatalog {
    fn default() -> Self {
        Self { sources: BTreeMap::new(), active: UNKNOWN_SOURCE.to_string() }
    }
}

impl MapCatalog {
    /// Parse the catalog service response:
    ///
    /// ```json
    /// { "maps": { "site_a": { "name": "Site A", "description": "…" } },
    ///   "current_map": "site_a" }
    /// ```
    ///
    /// Unknown fields are ignored.
    pub fn from_json(text: &str) -> SourceResult<Self> {
        let payload: CatalogPayload = serde_json::from_str(text)?;
        let sources = payload
            .maps
            .into_iter()
            .map(|(key, entry)| {
                let descriptor = MapSourceDescriptor {
                    key:         key.clone(),
                    name:        entry.name,
                    description: entry.description,
                };
                (key, descriptor)
            })
            .collect();
        Ok(Self { sources, active: payload.current_map })
    }

    /// Key of the currently active source.
    pub fn active(&self) -> &str {
        &self.active
    }

    pub(crate) fn set_active(&mut self, key: &str) {
        self.active = key.to_string();
    }

    pub fn get(&self, key: &str) -> Option<&MapSourceDescriptor> {
        self.sources.get(key)
    }

    /// Descriptors in stable (key-sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = &MapSourceDescriptor> {
        self.sources.values()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CatalogPayload {
    maps:        BTreeMap<String, SourceEntry>,
    current_map: String,
}

#[derive(Debug, Deserialize)]
struct SourceEntry {
    name:        String,
    #[serde(default)]
    description: String,
}
