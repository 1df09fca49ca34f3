//! `fm-source` — map-source catalog and the switch protocol for `fleet_map`.
//!
//! Maintains the catalog of selectable map sources and drives the switch
//! protocol against the external catalog/switch services.  The crate is
//! sans-IO: [`SourceSwitcher`] hands request descriptors out and consumes
//! completions; the host owns the transport and the post-switch delay timer.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`catalog`]  | `MapCatalog`, `MapSourceDescriptor`                  |
//! | [`switcher`] | `SourceSwitcher` state machine, request/accept types |
//! | [`error`]    | `SourceError`, `SourceResult<T>`                     |

pub mod catalog;
pub mod error;
pub mod switcher;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use catalog::{MapCatalog, MapSourceDescriptor};
pub use error::{SourceError, SourceResult};
pub use switcher::{
    CatalogRequest, SourceSwitcher, SwitchAccepted, SwitchRequest, SwitchState,
    REFRESH_DELAY_MS,
};
