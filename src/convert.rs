//! Pure unit and convention conversions.
//!
//! Every physical quantity leaves the category adapters in a single
//! documented unit: speeds in m/s, temperatures in Celsius, lap completion
//! as a fraction, sector indices in canonical 0,1,2 order, world axes in a
//! forward/left/up convention. These helpers are the only place those
//! conversions happen; raw producer units never leak past an adapter.

use crate::pages::Vec3;

/// Canonical-order lookup for the producer's raw sector indices.
///
/// The producer numbers sectors 0 = final sector, 1 = first, 2 = second;
/// consumers expect 0,1,2 in track order.
const SECTOR_FROM_RAW: [usize; 3] = [2, 0, 1];

/// Inverse of [`SECTOR_FROM_RAW`].
const SECTOR_TO_RAW: [i64; 3] = [1, 2, 0];

/// Scalar speed from a three-axis velocity vector, m/s.
pub fn velocity_to_speed(vx: f64, vy: f64, vz: f64) -> f64 {
    (vx * vx + vy * vy + vz * vz).sqrt()
}

/// Kelvin to Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

/// Distance along a lap as a fraction of track length, clamped to `[0, cap]`.
///
/// A zero (or meaningless negative) track length yields 0 rather than a
/// division error; between sessions the scoring region reports no track.
pub fn distance_to_percent(distance: f64, track_length: f64, cap: f64) -> f64 {
    if track_length <= 0.0 {
        return 0.0;
    }
    (distance / track_length).clamp(0.0, cap)
}

/// Map a raw producer sector index to canonical 0,1,2 track order.
///
/// Out-of-range raw values clamp to the nearest valid index before lookup,
/// so this is total over all inputs.
pub fn sector_from_raw(raw: i64) -> usize {
    SECTOR_FROM_RAW[raw.clamp(0, 2) as usize]
}

/// Map a canonical sector index back to the producer's raw order.
pub fn sector_to_raw(canonical: usize) -> i64 {
    SECTOR_TO_RAW[canonical.min(2)]
}

/// Remap a producer world-space vector to (longitudinal, lateral, vertical).
///
/// The producer's lateral axis points the opposite way, so the remap is
/// longitudinal = raw X, lateral = -raw Z, vertical = raw Y, giving the
/// right-handed forward/left/up convention all consumers share.
pub fn world_position_axes(v: Vec3) -> (f64, f64, f64) {
    (v.x, -v.z, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn speed_of_single_axis_velocity_is_its_magnitude() {
        assert_eq!(velocity_to_speed(5.0, 0.0, 0.0), 5.0);
        assert_eq!(velocity_to_speed(0.0, -5.0, 0.0), 5.0);
        assert_eq!(velocity_to_speed(0.0, 0.0, 5.0), 5.0);
    }

    #[test]
    fn speed_of_3_4_vector_is_5() {
        assert!((velocity_to_speed(3.0, 0.0, 4.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn kelvin_anchor_points() {
        assert_eq!(kelvin_to_celsius(273.15), 0.0);
        assert_eq!(kelvin_to_celsius(0.0), -273.15);
    }

    #[test]
    fn distance_percent_caps_below_full_lap() {
        assert_eq!(distance_to_percent(150.0, 100.0, 0.99999), 0.99999);
        assert_eq!(distance_to_percent(50.0, 100.0, 0.99999), 0.5);
        assert_eq!(distance_to_percent(-10.0, 100.0, 0.99999), 0.0);
    }

    #[test]
    fn distance_percent_guards_zero_track_length() {
        assert_eq!(distance_to_percent(500.0, 0.0, 0.99999), 0.0);
        assert_eq!(distance_to_percent(500.0, -1.0, 0.99999), 0.0);
    }

    #[test]
    fn sector_mapping_covers_raw_order() {
        assert_eq!(sector_from_raw(0), 2);
        assert_eq!(sector_from_raw(1), 0);
        assert_eq!(sector_from_raw(2), 1);
    }

    #[test]
    fn sector_mapping_clamps_out_of_range_input() {
        assert_eq!(sector_from_raw(5), 1); // clamps to 2, then maps to 1
        assert_eq!(sector_from_raw(-3), 2); // clamps to 0, then maps to 2
    }

    #[test]
    fn world_axes_negate_lateral_only() {
        let v = Vec3 { x: 1.0, y: 2.0, z: 3.0 };
        assert_eq!(world_position_axes(v), (1.0, -3.0, 2.0));
    }

    proptest! {
        #[test]
        fn sector_roundtrip_is_identity(canonical in 0usize..3) {
            prop_assert_eq!(sector_from_raw(sector_to_raw(canonical)), canonical);
        }

        #[test]
        fn raw_sector_roundtrip_is_identity(raw in 0i64..3) {
            prop_assert_eq!(sector_to_raw(sector_from_raw(raw)), raw);
        }

        #[test]
        fn distance_percent_is_monotonic_and_bounded(
            d1 in 0.0f64..10_000.0,
            d2 in 0.0f64..10_000.0,
            length in 1.0f64..10_000.0,
        ) {
            let cap = 0.99999;
            let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            let p_lo = distance_to_percent(lo, length, cap);
            let p_hi = distance_to_percent(hi, length, cap);
            prop_assert!(p_lo <= p_hi);
            prop_assert!((0.0..=cap).contains(&p_lo));
            prop_assert!((0.0..=cap).contains(&p_hi));
        }

        #[test]
        fn speed_is_nonnegative_and_axis_symmetric(
            vx in -500.0f64..500.0,
            vy in -500.0f64..500.0,
            vz in -500.0f64..500.0,
        ) {
            let speed = velocity_to_speed(vx, vy, vz);
            prop_assert!(speed >= 0.0);
            prop_assert!((velocity_to_speed(-vx, vy, vz) - speed).abs() < 1e-9);
            prop_assert!((velocity_to_speed(vz, vx, vy) - speed).abs() < 1e-9);
        }
    }
}
