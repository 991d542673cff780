//! Session and flag state checks.

use serde::{Deserialize, Serialize};

use super::Reader;
use crate::raw::RawValue;
use crate::resolve::VehicleQuery;
use crate::text;

/// Composite identity of one session configuration.
///
/// `stamp` folds the scheduled session length and the session type code into
/// a single integer that changes whenever the session configuration changes;
/// downstream consumers use it to invalidate caches keyed to "this session".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionId {
    /// `round(session_length_seconds * 100) + session_type_code`.
    pub stamp: i64,
    /// Whole seconds of session clock elapsed.
    pub elapsed: i64,
    /// Laps completed by the local player.
    pub total_laps: i64,
}

/// State checks: what the session is, where the player is, which flags fly.
#[derive(Clone)]
pub struct State {
    reader: Reader,
}

impl State {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Plugin API version string.
    pub fn version(&self) -> String {
        text::decode(&self.reader.extended().version)
    }

    /// Track & vehicle-class combo, for profile matching.
    pub fn combo(&self) -> String {
        let track = text::decode(&self.reader.scoring().scoring_info.track_name);
        let class = self.reader.scor_text(VehicleQuery::LocalPlayer, |v| v.vehicle_class.as_slice());
        text::strip_invalid_char(&format!("{track} - {class}"))
    }

    /// Vehicle class & name of the local player.
    pub fn vehicle(&self) -> String {
        let class = self.reader.scor_text(VehicleQuery::LocalPlayer, |v| v.vehicle_class.as_slice());
        let name = self.reader.scor_text(VehicleQuery::LocalPlayer, |v| v.vehicle_name.as_slice());
        text::strip_invalid_char(&format!("{class} - {name}"))
    }

    /// Track name.
    pub fn track(&self) -> String {
        text::decode(&self.reader.scoring().scoring_info.track_name)
    }

    /// Identity of the current session configuration.
    pub fn session(&self) -> SessionId {
        let info = &self.reader.scoring().scoring_info;
        let length = info.end_et.sample().unwrap_or_default();
        let session_type = info.session as i64;
        SessionId {
            stamp: (length * 100.0).round() as i64 + session_type,
            elapsed: info.current_et.sample().unwrap_or_default() as i64,
            total_laps: self.reader.scor(VehicleQuery::LocalPlayer, |v| v.total_laps),
        }
    }

    /// Is the local player in the cockpit (ignition live) rather than in the
    /// monitor.
    pub fn is_driving(&self) -> bool {
        self.reader.tele(VehicleQuery::LocalPlayer, |v| v.ignition_starter) != 0
    }

    /// Is this a lap-limited session, false for a time-limited one.
    ///
    /// The producer publishes `i32::MAX` as the lap limit of time-limited
    /// sessions.
    pub fn lap_finish(&self) -> bool {
        self.reader.scoring().scoring_info.max_laps < i32::MAX
    }

    /// Is the pre-race countdown phase running.
    pub fn in_countdown(&self) -> bool {
        self.reader.scoring().scoring_info.game_phase == 4
    }

    /// Is a race session (as opposed to test day, practice, qualify, warmup).
    pub fn in_race(&self) -> bool {
        self.reader.scoring().scoring_info.session > 9
    }

    /// Is the vehicle in the pit lane.
    pub fn in_pits(&self, veh: VehicleQuery) -> bool {
        self.reader.scor(veh, |v| v.in_pits) != 0
    }

    /// Is the vehicle in its garage stall.
    pub fn in_garage(&self, veh: VehicleQuery) -> bool {
        self.reader.scor(veh, |v| v.in_garage_stall) != 0
    }

    /// Is the pit lane open.
    pub fn pit_open(&self) -> bool {
        self.reader.scoring().scoring_info.game_phase > 0
    }

    /// Does the vehicle share the local player's class.
    pub fn same_vehicle_class(&self, veh: VehicleQuery) -> bool {
        let class = self.reader.scor_text(veh, |v| v.vehicle_class.as_slice());
        let player = self.reader.scor_text(VehicleQuery::LocalPlayer, |v| v.vehicle_class.as_slice());
        class == player
    }

    /// Is the vehicle being shown the blue flag.
    pub fn blue_flag(&self, veh: VehicleQuery) -> bool {
        self.reader.scor(veh, |v| v.flag) == 6
    }

    /// Is the yellow flag flying in any sector.
    pub fn yellow_flag(&self) -> bool {
        self.reader.scoring().scoring_info.sector_flag.iter().any(|&flag| flag == 1)
    }

    /// Start-light countdown: the number of frames left until lights out.
    pub fn start_lights(&self) -> i64 {
        let info = &self.reader.scoring().scoring_info;
        (info.num_red_lights as i64 + 1) - info.start_light as i64
    }
}
