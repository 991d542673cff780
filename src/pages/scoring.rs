//! Scoring region: per-vehicle race state plus session-wide scoring info.
//!
//! Slots here follow classification order as maintained by the scoring
//! producer, refreshed at a slower cadence than telemetry (roughly every
//! 200ms versus every physics step). The local player is found by scanning
//! for the slot whose control markers flag it as player-driven.

use super::{MAX_VEHICLES, Vec3, read_page};
use crate::Result;

/// Session-wide scoring state.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ScoringInfo {
    pub track_name: [u8; 64],
    /// Session type code: 0 test day, 1-4 practice, 5-8 qualify,
    /// 9 warmup, 10+ race.
    pub session: i32,
    /// Session clock, seconds.
    pub current_et: f64,
    /// Scheduled session end, seconds of session clock.
    pub end_et: f64,
    /// Maximum laps; `i32::MAX` for time-limited sessions.
    pub max_laps: i32,
    /// Track length, metres.
    pub lap_dist: f64,
    /// Number of populated vehicle slots.
    pub num_vehicles: i32,

    /// 0 before session, 4 countdown, 5 green, ... producer-defined phases.
    pub game_phase: u8,
    pub yellow_flag_state: i8,
    /// Per-sector flag state in raw sector order; 1 means yellow.
    pub sector_flag: [i8; 3],
    /// Current frame of the start-light sequence.
    pub start_light: u8,
    pub num_red_lights: u8,
    pub in_realtime: u8,
    pub player_name: [u8; 32],
    pub player_file_name: [u8; 64],

    pub dark_cloud: f64,
    /// Rain severity, 0.0..=1.0.
    pub raining: f64,
    /// Ambient temperature, Celsius.
    pub ambient_temp: f64,
    /// Track surface temperature, Celsius.
    pub track_temp: f64,
    pub wind: Vec3,
    pub min_path_wetness: f64,
    pub max_path_wetness: f64,

    pub game_mode: i32,
    pub is_password_protected: u8,
    pub server_port: u16,
    pub server_public_ip: u32,
    pub max_players: i32,
    pub server_name: [u8; 32],
    /// Session clock value at the official start, seconds.
    pub start_et: f64,
    pub avg_path_wetness: f64,
}

/// One vehicle's race-state slot.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct VehicleScoring {
    /// Stable vehicle identifier, shared with the telemetry region.
    pub id: i32,
    pub driver_name: [u8; 32],
    pub vehicle_name: [u8; 64],
    pub total_laps: i16,
    /// Raw sector index in producer order (0 = sector 3, 1 = sector 1,
    /// 2 = sector 2); see [`crate::convert::sector_from_raw`].
    pub sector: i8,
    /// 0 none, 1 finished, 2 dnf, 3 dq.
    pub finish_status: i8,
    /// Distance into the current lap, metres.
    pub lap_dist: f64,
    pub path_lateral: f64,
    pub track_edge: f64,

    pub best_sector1: f64,
    pub best_sector2: f64,
    pub best_lap_time: f64,
    pub last_sector1: f64,
    pub last_sector2: f64,
    pub last_lap_time: f64,
    pub cur_sector1: f64,
    pub cur_sector2: f64,

    pub num_pitstops: i16,
    pub num_penalties: i16,
    /// Nonzero when this slot is the local player's vehicle.
    pub is_player: u8,
    /// -1 nobody, 0 local player, 1 ai, 2 remote, 3 replay.
    pub control: i8,
    pub in_pits: u8,
    /// Classification position, 1-based.
    pub place: u8,
    pub vehicle_class: [u8; 32],

    pub time_behind_next: f64,
    pub laps_behind_next: i32,
    pub time_behind_leader: f64,
    pub laps_behind_leader: i32,
    /// Session clock at the start of the current lap, seconds.
    pub lap_start_et: f64,

    pub pos: Vec3,
    pub local_vel: Vec3,
    pub local_accel: Vec3,
    pub ori: [Vec3; 3],
    pub local_rot: Vec3,
    pub local_rot_accel: Vec3,

    pub headlights: u8,
    /// 0 none, 1 request, 2 entering, 3 stopped, 4 exiting.
    pub pit_state: u8,
    pub server_scored: u8,
    pub individual_phase: u8,
    pub qualification: i32,
    pub time_into_lap: f64,
    pub estimated_lap_time: f64,
    pub pit_group: [u8; 24],
    /// 0 none, 6 blue flag being shown to this vehicle.
    pub flag: u8,
    pub under_yellow: u8,
    pub count_lap_flag: u8,
    pub in_garage_stall: u8,
    pub upgrade_pack: [u8; 16],
    pub pit_lap_dist: f32,
    pub best_lap_sector1: f32,
    pub best_lap_sector2: f32,
}

/// The scoring region as mapped by the producer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ScoringPage {
    pub version_update_begin: u32,
    pub version_update_end: u32,
    pub bytes_updated_hint: i32,
    pub scoring_info: ScoringInfo,
    pub vehicles: [VehicleScoring; MAX_VEHICLES],
}

impl ScoringPage {
    /// Copy a scoring page out of a raw mapped region.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        read_page(bytes)
    }

    /// Whether the producer was mid-write when this copy was taken.
    pub fn is_torn(&self) -> bool {
        self.version_update_begin != self.version_update_end
    }

    /// Populated vehicle slots, clamped to the mapped maximum.
    pub fn vehicle_count(&self) -> usize {
        self.scoring_info.num_vehicles.clamp(0, MAX_VEHICLES as i32) as usize
    }

    /// Bounds-checked slot access over the populated range.
    pub fn vehicle(&self, slot: usize) -> Option<&VehicleScoring> {
        self.vehicles.get(..self.vehicle_count())?.get(slot)
    }
}

impl Default for ScoringInfo {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

impl Default for VehicleScoring {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

impl Default for ScoringPage {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_access_honours_populated_count() {
        let mut page = ScoringPage::default();
        page.scoring_info.num_vehicles = 1;
        page.vehicles[0].place = 1;

        assert!(page.vehicle(0).is_some());
        assert!(page.vehicle(1).is_none());
    }

    #[test]
    fn from_bytes_requires_full_page() {
        let bytes = vec![0u8; std::mem::size_of::<ScoringPage>() - 1];
        assert!(ScoringPage::from_bytes(&bytes).is_err());

        let bytes = vec![0u8; std::mem::size_of::<ScoringPage>()];
        let page = ScoringPage::from_bytes(&bytes).unwrap();
        assert_eq!(page.vehicle_count(), 0);
    }
}
