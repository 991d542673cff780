//! Producer contract structs for the rFactor 2 shared-memory block.
//!
//! The simulation's shared-memory plugin publishes three independently
//! refreshed regions, telemetry (per-vehicle physics), scoring (per-vehicle
//! race state) and extended (session-scoped values), plus a single-cell
//! force-feedback region. This module mirrors those regions as `#[repr(C)]`
//! structs so an attached transport can hand out typed page references.
//!
//! # Versioning and tearing
//!
//! Every region carries a `version_update_begin` / `version_update_end` pair.
//! The producer increments `begin` before writing and `end` after, so a page
//! whose counters differ was captured mid-write. Torn pages are *not* an
//! error here: this layer tolerates stale or inconsistent reads by contract,
//! and [`is_torn`](TelemetryPage::is_torn) exists only so transports can
//! decide whether to re-copy.
//!
//! # The zero state
//!
//! An all-zero page is exactly what a reader observes before the producer has
//! written anything. `Default` for every page and slot struct is therefore
//! the zeroed value, and every accessor built on top of these structs is
//! required to produce its documented default when handed one.

mod extended;
mod scoring;
mod telemetry;

pub use extended::{ExtendedPage, ForceFeedbackPage, PhysicsOptions};
pub use scoring::{ScoringInfo, ScoringPage, VehicleScoring};
pub use telemetry::{TelemetryPage, VehicleTelemetry, WheelTelemetry};

use crate::{Result, TelemetryError};

/// Maximum number of vehicle slots the producer maps per region.
pub const MAX_VEHICLES: usize = 128;

/// Number of wheels per vehicle. Physical invariant, not a tuning knob.
pub const WHEEL_COUNT: usize = 4;

/// Number of tyre temperature layers (left, centre, right of the patch).
pub const TEMPERATURE_LAYERS: usize = 3;

/// Three-axis vector in the producer's native coordinate convention.
///
/// The producer uses X = longitudinal, Z = negated lateral, Y = vertical for
/// world positions; consumers should go through [`crate::convert`] rather
/// than interpreting axes directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Copy a page struct out of a raw byte region.
///
/// The producer guarantees alignment only of the mapping base, so the copy
/// uses an unaligned read. Callers get a layout-checked owned value; tearing
/// is still possible and is reported by the page's version tags, not here.
pub(crate) fn read_page<T: Copy>(bytes: &[u8]) -> Result<T> {
    let needed = std::mem::size_of::<T>();
    if bytes.len() < needed {
        return Err(TelemetryError::memory_too_small(needed, bytes.len()));
    }

    // Safety: length checked above, and every page type is a plain-old-data
    // repr(C) struct for which any bit pattern is a valid value.
    Ok(unsafe { std::ptr::read_unaligned(bytes.as_ptr() as *const T) })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// View a page struct as raw bytes, as a transport would publish it.
    fn as_bytes<T>(value: &T) -> &[u8] {
        unsafe {
            std::slice::from_raw_parts(value as *const T as *const u8, std::mem::size_of::<T>())
        }
    }

    #[test]
    fn read_page_roundtrips_telemetry() {
        let mut page = TelemetryPage::default();
        page.num_vehicles = 3;
        page.vehicles[2].engine_rpm = 7250.0;

        let copy: TelemetryPage = read_page(as_bytes(&page)).unwrap();
        assert_eq!(copy.num_vehicles, 3);
        assert_eq!(copy.vehicles[2].engine_rpm, 7250.0);
    }

    #[test]
    fn read_page_rejects_short_buffers() {
        let short = vec![0u8; 64];
        let result: Result<ScoringPage> = read_page(&short);
        assert!(matches!(result, Err(TelemetryError::Memory { .. })));
    }

    #[test]
    fn torn_page_detection_uses_version_tags() {
        let mut page = ScoringPage::default();
        assert!(!page.is_torn());

        page.version_update_begin = 12;
        page.version_update_end = 11;
        assert!(page.is_torn());

        page.version_update_end = 12;
        assert!(!page.is_torn());
    }

    #[test]
    fn zeroed_pages_are_the_default() {
        let telemetry = TelemetryPage::default();
        assert_eq!(telemetry.num_vehicles, 0);
        assert_eq!(telemetry.vehicles[0].engine_rpm, 0.0);

        let scoring = ScoringPage::default();
        assert_eq!(scoring.scoring_info.num_vehicles, 0);
        assert_eq!(scoring.vehicles[0].driver_name, [0u8; 32]);
    }
}
