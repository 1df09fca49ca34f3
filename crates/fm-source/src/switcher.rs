//! The map-source switch state machine.
//!
//! # Protocol
//!
//! ```text
//!        refresh_catalog()          on_catalog(..)
//! Idle ───────────────────▶ Loading ─────────────▶ Idle
//!
//!        begin_switch(key)            on_switch_response(ok)
//! Idle ───────────────────▶ Switching ────────────▶ ConfirmRefresh
//!                               │                        │ refresh_due()
//!                               │ on_switch_response(err)│ … on_catalog(..)
//!                               ▼                        ▼
//!                             Idle                     Idle
//! ```
//!
//! On a switch success the active key is set optimistically and the caller is
//! told (via [`SwitchAccepted`]) to notify the map-owning collaborator and to
//! schedule a catalog re-fetch after [`REFRESH_DELAY_MS`], which reconciles
//! against the service's authoritative state.  The active key is only ever
//! written on a success response, so a failed or rejected switch leaves the
//! catalog exactly as it was.
//!
//! Exactly one operation may be in flight; requests arriving while busy are
//! rejected with [`SourceError::Busy`] (the UI disables input during a
//! switch, so queueing has nothing to serve).

use log::{debug, info, warn};
use serde::Deserialize;

use crate::catalog::MapCatalog;
use crate::{SourceError, SourceResult};

/// Delay before the post-switch catalog re-fetch, in milliseconds.
pub const REFRESH_DELAY_MS: u64 = 500;

// ── Requests and outcomes ─────────────────────────────────────────────────────

/// Instruction to the transport: fetch the catalog listing.
///
/// `bypass_cache` is always set — the listing must reflect the service's
/// current state, not a cached one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub bypass_cache: bool,
}

/// Instruction to the transport: request a switch to source `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRequest {
    pub key:          String,
    pub bypass_cache: bool,
}

/// A switch was accepted by the service.
///
/// The caller must now (1) notify the collaborator owning the rendered map so
/// it re-ingests under `key`, and (2) call
/// [`SourceSwitcher::refresh_due`] after `refresh_delay_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchAccepted {
    pub key:              String,
    pub refresh_delay_ms: u64,
}

/// Protocol state.  See the module docs for the transition diagram.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SwitchState {
    #[default]
    Idle,
    /// Catalog fetch in flight.
    Loading,
    /// Switch request in flight.
    Switching { target: String },
    /// Switch confirmed; the delayed reconciling re-fetch has not completed.
    ConfirmRefresh,
}

// ── SourceSwitcher ────────────────────────────────────────────────────────────

/// Sole owner and mutator of the [`MapCatalog`] and the active-key flag.
#[derive(Debug, Default)]
pub struct SourceSwitcher {
    state:   SwitchState,
    catalog: MapCatalog,
}

impl SourceSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &MapCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &SwitchState {
        &self.state
    }

    /// `true` while any request is in flight (UI should disable input).
    pub fn is_busy(&self) -> bool {
        self.state != SwitchState::Idle
    }

    // ── Catalog fetch ─────────────────────────────────────────────────────

    /// Start a catalog fetch.
    ///
    /// # Errors
    ///
    /// [`SourceError::Busy`] when any operation is already in flight.
    pub fn refresh_catalog(&mut self) -> SourceResult<CatalogRequest> {
        if self.is_busy() {
            return Err(SourceError::Busy);
        }
        self.state = SwitchState::Loading;
        Ok(CatalogRequest { bypass_cache: true })
    }

    /// Deliver a catalog fetch completion (initial fetch or post-switch
    /// refresh).
    ///
    /// The machine returns to `Idle` unconditionally — a failed post-switch
    /// refresh surfaces its error but never re-triggers the switch.  On
    /// failure the catalog is left unchanged.
    pub fn on_catalog(&mut self, result: Result<&str, String>) -> SourceResult<()> {
        match self.state {
            SwitchState::Loading | SwitchState::ConfirmRefresh => {}
            _ => return Err(SourceError::NoRequestInFlight),
        }
        self.state = SwitchState::Idle;

        let text = result.map_err(SourceError::Catalog)?;
        let catalog = MapCatalog::from_json(text)?;
        info!(
            "catalog updated: {} sources, active '{}'",
            catalog.len(),
            catalog.active()
        );
        self.catalog = catalog;
        Ok(())
    }

    // ── Switch protocol ───────────────────────────────────────────────────

    /// Start switching to `key`.
    ///
    /// Switching to the already-active key is a no-op: `Ok(None)`, no state
    /// transition, no network call.
    ///
    /// # Errors
    ///
    /// [`SourceError::Busy`] when any operation is already in flight.
    pub fn begin_switch(&mut self, key: &str) -> SourceResult<Option<SwitchRequest>> {
        if self.is_busy() {
            return Err(SourceError::Busy);
        }
        if key == self.catalog.active() {
            debug!("switch to '{key}' ignored: already active");
            return Ok(None);
        }
        self.state = SwitchState::Switching { target: key.to_string() };
        Ok(Some(SwitchRequest { key: key.to_string(), bypass_cache: true }))
    }

    /// Deliver the switch service's response:
    ///
    /// ```json
    /// { "success": true }
    /// { "success": false, "error": "map files not found" }
    /// ```
    ///
    /// # Errors
    ///
    /// [`SourceError::Switch`] / [`SourceError::Payload`] on a rejected
    /// switch, transport failure, or malformed payload — in every failure
    /// case the machine is back at `Idle` with the active key untouched.
    pub fn on_switch_response(&mut self, result: Result<&str, String>) -> SourceResult<SwitchAccepted> {
        let target = match std::mem::replace(&mut self.state, SwitchState::Idle) {
            SwitchState::Switching { target } => target,
            other => {
                self.state = other;
                return Err(SourceError::NoRequestInFlight);
            }
        };

        let text = result.map_err(SourceError::Switch)?;
        let payload: SwitchPayload = serde_json::from_str(text)?;
        if !payload.success {
            let detail = payload.error.unwrap_or_else(|| "unspecified error".to_string());
            warn!("switch to '{target}' rejected: {detail}");
            return Err(SourceError::Switch(detail));
        }

        self.catalog.set_active(&target);
        self.state = SwitchState::ConfirmRefresh;
        info!("active source is now '{target}'; reconciling refresh pending");
        Ok(SwitchAccepted { key: target, refresh_delay_ms: REFRESH_DELAY_MS })
    }

    /// The post-switch delay elapsed: start the reconciling catalog fetch.
    ///
    /// The machine stays in `ConfirmRefresh` until
    /// [`on_catalog`](Self::on_catalog) delivers the completion.
    ///
    /// # Errors
    ///
    /// [`SourceError::NoRequestInFlight`] when no switch is awaiting its
    /// refresh.
    pub fn refresh_due(&mut self) -> SourceResult<CatalogRequest> {
        match self.state {
            SwitchState::ConfirmRefresh => Ok(CatalogRequest { bypass_cache: true }),
            _ => Err(SourceError::NoRequestInFlight),
        }
    }
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SwitchPayload {
    success: bool,
    #[serde(default)]
    error:   Option<String>,
}
