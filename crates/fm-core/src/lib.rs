//! `fm-core` — foundational types for the `fleet_map` operational map.
//!
//! This crate is a dependency of every other `fm-*` crate.  It intentionally
//! has no `fm-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                          |
//! |----------|---------------------------------------------------|
//! | [`geo`]  | `GeoPoint`, `GeoBounds`, `Origin`                 |
//! | [`pose`] | `Pose` — live vehicle/goal state with validity    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod pose;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{GeoBounds, GeoPoint, Origin};
pub use pose::Pose;
