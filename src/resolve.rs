//! Vehicle slot resolution across the telemetry and scoring regions.
//!
//! The two per-vehicle regions are indexed independently: scoring slots
//! follow classification order, telemetry slots follow the producer's
//! physics/draw order, and neither assignment is stable between refreshes.
//! A [`VehicleResolver`] therefore resolves every request fresh, pairing a
//! scoring slot with its telemetry slot by matching the stable vehicle `id`
//! present in both regions.
//!
//! Resolution never fails: out-of-range requests produce the no-vehicle
//! [`VehicleHandle`], and id mismatches (expected transiently during session
//! transitions) fall back to the positional index rather than erroring.

use crate::pages::{ScoringPage, TelemetryPage};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A logical vehicle request.
///
/// The default request is the local player, resolved fresh on every call;
/// an explicit slot refers to the scoring region's classification order and
/// is treated as authoritative beyond bounds checking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleQuery {
    /// The vehicle whose scoring slot is flagged as player-controlled.
    #[default]
    LocalPlayer,
    /// An explicit scoring slot.
    Slot(usize),
}

impl From<usize> for VehicleQuery {
    fn from(slot: usize) -> Self {
        VehicleQuery::Slot(slot)
    }
}

/// A resolved (scoring slot, telemetry slot) pair for one vehicle.
///
/// Either slot may be absent: the no-vehicle handle carries `None` for both,
/// and a vehicle present in scoring but missing from telemetry (or the other
/// way round, mid-transition) carries `None` on that side only. Accessors
/// receiving an absent slot degrade to their documented defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleHandle {
    pub scoring_slot: Option<usize>,
    pub telemetry_slot: Option<usize>,
}

impl VehicleHandle {
    /// The sentinel handle for "no such vehicle".
    pub const NONE: VehicleHandle = VehicleHandle { scoring_slot: None, telemetry_slot: None };

    /// Whether this handle points at no vehicle at all.
    pub fn is_none(&self) -> bool {
        self.scoring_slot.is_none() && self.telemetry_slot.is_none()
    }
}

/// Per-call resolver over the current page state.
///
/// Holds only borrows of the live pages; nothing is cached across calls
/// because slot assignment can change frame to frame.
#[derive(Debug, Clone, Copy)]
pub struct VehicleResolver<'a> {
    telemetry: &'a TelemetryPage,
    scoring: &'a ScoringPage,
}

impl<'a> VehicleResolver<'a> {
    pub fn new(telemetry: &'a TelemetryPage, scoring: &'a ScoringPage) -> Self {
        Self { telemetry, scoring }
    }

    /// Resolve a request to a handle. Never fails; see module docs.
    pub fn resolve(&self, query: VehicleQuery) -> VehicleHandle {
        let scoring_slot = match query {
            VehicleQuery::LocalPlayer => self.local_player_slot(),
            VehicleQuery::Slot(slot) if slot < self.scoring.vehicle_count() => Some(slot),
            VehicleQuery::Slot(_) => None,
        };

        let telemetry_slot = scoring_slot.and_then(|slot| self.telemetry_slot_for(slot));
        VehicleHandle { scoring_slot, telemetry_slot }
    }

    /// Scan the scoring array for the player-controlled entry.
    ///
    /// Scanned fresh on demand; the player's slot moves when the
    /// classification order changes.
    pub fn local_player_slot(&self) -> Option<usize> {
        let count = self.scoring.vehicle_count();
        self.scoring.vehicles[..count].iter().position(|v| v.is_player != 0)
    }

    /// Find the telemetry slot carrying the same vehicle id as the given
    /// scoring slot.
    ///
    /// Falls back to the positional index when no id matches. During
    /// session transitions the two regions disagree transiently, and a
    /// best-effort pairing keeps the display alive.
    pub fn telemetry_slot_for(&self, scoring_slot: usize) -> Option<usize> {
        let entry = self.scoring.vehicle(scoring_slot)?;
        let count = self.telemetry.vehicle_count();

        if let Some(slot) = self.telemetry.vehicles[..count].iter().position(|v| v.id == entry.id)
        {
            return Some(slot);
        }

        trace!(
            scoring_slot,
            vehicle_id = entry.id,
            "no telemetry slot matches vehicle id, using positional fallback"
        );
        (scoring_slot < count).then_some(scoring_slot)
    }
}
