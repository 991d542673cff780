//! Extended region: session-scoped values not tied to a vehicle slot,
//! plus the single-cell force-feedback region.

use super::read_page;
use crate::Result;

/// Physics/driving-aid configuration as reported by the producer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsOptions {
    /// 0 off, 1 low, 2 high.
    pub traction_control: u8,
    pub anti_lock_brakes: u8,
    pub stability_control: u8,
    /// 0 off, 1 upshifts, 2 downshifts, 3 all.
    pub auto_shift: u8,
    pub auto_clutch: u8,
    pub invulnerable: u8,
    pub opposite_lock: u8,
    /// 0 off .. 3 high.
    pub steering_help: u8,
    pub braking_help: u8,
    pub spin_recovery: u8,
    pub auto_pit: u8,
    pub auto_lift: u8,
    pub auto_blip: u8,
    /// Fuel usage multiplier.
    pub fuel_mult: u8,
    /// Tyre wear multiplier.
    pub tire_mult: u8,
    /// 0 off, 1 normal, 2 timescaled.
    pub mech_fail: u8,
    pub allow_pitcrew_push: u8,
    pub repeat_shifts: u8,
    pub hold_clutch: u8,
    pub auto_reverse: u8,
    pub alternate_neutral: u8,
    pub ai_control: u8,
    pub manual_shift_override_time: f64,
    pub auto_shift_override_time: f64,
    pub speed_sensitive_steering: f64,
    pub steer_ratio_speed: f64,
}

/// The extended region as mapped by the producer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ExtendedPage {
    pub version_update_begin: u32,
    pub version_update_end: u32,
    /// Plugin API version string, NUL-terminated.
    pub version: [u8; 12],
    pub is_64bit: u8,
    pub physics: PhysicsOptions,
    pub session_started: u8,
    /// Session clock at which the producer last began a session, seconds.
    pub session_start_et: f64,
    pub ticks_session_started: u32,
    pub ticks_session_ended: u32,
    pub in_realtime_fc: u8,
    pub multimedia_thread_started: u8,
    pub simulation_thread_started: u8,
}

impl ExtendedPage {
    /// Copy an extended page out of a raw mapped region.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        read_page(bytes)
    }

    /// Whether the producer was mid-write when this copy was taken.
    pub fn is_torn(&self) -> bool {
        self.version_update_begin != self.version_update_end
    }
}

/// Force-feedback region: refreshed every physics step, one value.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceFeedbackPage {
    pub version_update_begin: u32,
    pub version_update_end: u32,
    /// Current steering force, producer-native torque units.
    pub force_value: f64,
}

impl ForceFeedbackPage {
    /// Copy a force-feedback page out of a raw mapped region.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        read_page(bytes)
    }

    /// Whether the producer was mid-write when this copy was taken.
    pub fn is_torn(&self) -> bool {
        self.version_update_begin != self.version_update_end
    }
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

impl Default for ExtendedPage {
    fn default() -> Self {
        unsafe { std::mem::zeroed() }
    }
}
