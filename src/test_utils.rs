//! Test utilities: snapshot fixtures shared across unit and integration
//! tests and the benchmark harness.

#![cfg(any(test, feature = "benchmark"))]

use std::sync::Arc;

use crate::data::DataSet;
use crate::pages::{ScoringPage, TelemetryPage};
use crate::source::StaticSnapshot;

/// Write a name into a fixed-length producer text buffer.
pub fn fill_name(buffer: &mut [u8], name: &str) {
    let bytes = name.as_bytes();
    let len = bytes.len().min(buffer.len().saturating_sub(1));
    buffer[..len].copy_from_slice(&bytes[..len]);
}

/// A three-vehicle session with the regions deliberately permuted.
///
/// Scoring order (classification):
///   slot 0 → id 30, "A. Verde", GT3
///   slot 1 → id 10, "B. Rossi", GT3, local player
///   slot 2 → id 20, "C. Blanc", GT4
///
/// Telemetry order (physics):
///   slot 0 → id 10, slot 1 → id 20, slot 2 → id 30
///
/// So the player lives at scoring slot 1 and telemetry slot 0, and id-based
/// cross-referencing is required to pair slots correctly.
pub fn populated_snapshot() -> StaticSnapshot {
    let mut scoring = ScoringPage::default();
    scoring.scoring_info.num_vehicles = 3;
    fill_name(&mut scoring.scoring_info.track_name, "Sebring");

    let entries: [(i32, &str, &str, bool); 3] =
        [(30, "A. Verde", "GT3", false), (10, "B. Rossi", "GT3", true), (20, "C. Blanc", "GT4", false)];
    for (slot, (id, driver, class, is_player)) in entries.into_iter().enumerate() {
        let vehicle = &mut scoring.vehicles[slot];
        vehicle.id = id;
        vehicle.is_player = u8::from(is_player);
        vehicle.place = slot as u8 + 1;
        fill_name(&mut vehicle.driver_name, driver);
        fill_name(&mut vehicle.vehicle_class, class);
    }

    let mut telemetry = TelemetryPage::default();
    telemetry.num_vehicles = 3;
    for (slot, id) in [10, 20, 30].into_iter().enumerate() {
        telemetry.vehicles[slot].id = id;
    }

    StaticSnapshot { telemetry, scoring, ..StaticSnapshot::default() }
}

/// The producer's pre-write state: every region zeroed.
pub fn empty_snapshot() -> StaticSnapshot {
    StaticSnapshot::default()
}

/// Build a [`DataSet`] over an owned snapshot fixture.
pub fn dataset(snapshot: StaticSnapshot) -> DataSet {
    DataSet::new(Arc::new(snapshot))
}
