//! Lap progress and lap/sector timing accessors.

use super::Reader;
use crate::convert;
use crate::raw::RawValue;
use crate::resolve::VehicleQuery;

/// Lap counting and progress along the current lap.
#[derive(Clone)]
pub struct Lap {
    reader: Reader,
}

impl Lap {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Current lap number.
    pub fn number(&self, veh: VehicleQuery) -> i64 {
        self.reader.tele(veh, |v| v.lap_number)
    }

    /// Total completed laps.
    pub fn total(&self, veh: VehicleQuery) -> i64 {
        self.reader.scor(veh, |v| v.total_laps)
    }

    /// Full lap (track) length, metres.
    pub fn track_length(&self) -> f64 {
        self.reader.scoring().scoring_info.lap_dist.sample().unwrap_or_default()
    }

    /// Distance into the current lap, metres.
    pub fn distance(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.lap_dist)
    }

    /// Lap completion fraction, capped just below 1.0.
    ///
    /// The cap keeps a car that is mid-line-crossing from reading as having
    /// already completed the lap.
    pub fn percent(&self, veh: VehicleQuery) -> f64 {
        convert::distance_to_percent(self.distance(veh), self.track_length(), 0.99999)
    }

    /// Session lap limit; `i32::MAX as i64` for time-limited sessions.
    pub fn maximum(&self) -> i64 {
        self.reader.scoring().scoring_info.max_laps as i64
    }

    /// Current sector in canonical 0,1,2 track order.
    pub fn sector_index(&self, veh: VehicleQuery) -> usize {
        convert::sector_from_raw(self.reader.scor(veh, |v| v.sector))
    }

    /// Laps behind the leader.
    pub fn behind_leader(&self, veh: VehicleQuery) -> i64 {
        self.reader.scor(veh, |v| v.laps_behind_leader)
    }

    /// Laps behind the next classified place.
    pub fn behind_next(&self, veh: VehicleQuery) -> i64 {
        self.reader.scor(veh, |v| v.laps_behind_next)
    }
}

/// Lap and sector times, seconds of session clock.
#[derive(Clone)]
pub struct Timing {
    reader: Reader,
}

impl Timing {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Session clock at the start of the current lap.
    pub fn start(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.lap_start_et)
    }

    /// Session clock at the last physics update.
    pub fn elapsed(&self, veh: VehicleQuery) -> f64 {
        self.reader.tele(veh, |v| v.elapsed_time)
    }

    /// Live duration of the lap in progress. Not a finalized lap time.
    pub fn current_laptime(&self, veh: VehicleQuery) -> f64 {
        self.elapsed(veh) - self.start(veh)
    }

    /// Last completed lap time.
    pub fn last_laptime(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.last_lap_time)
    }

    /// Best lap time this session.
    pub fn best_laptime(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.best_lap_time)
    }

    /// Current lap sector 1 time.
    pub fn curr_sector1(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.cur_sector1)
    }

    /// Current lap cumulative sector 1+2 time.
    pub fn curr_sector2(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.cur_sector2)
    }

    /// Last lap sector 1 time.
    pub fn last_sector1(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.last_sector1)
    }

    /// Last lap cumulative sector 1+2 time.
    pub fn last_sector2(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.last_sector2)
    }

    /// Best sector 1 time this session.
    pub fn best_sector1(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.best_sector1)
    }

    /// Best cumulative sector 1+2 time this session.
    pub fn best_sector2(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.best_sector2)
    }

    /// Time behind the leader.
    pub fn behind_leader(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.time_behind_leader)
    }

    /// Time behind the next classified place.
    pub fn behind_next(&self, veh: VehicleQuery) -> f64 {
        self.reader.scor(veh, |v| v.time_behind_next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dataset, populated_snapshot};

    const PLAYER: VehicleQuery = VehicleQuery::LocalPlayer;

    #[test]
    fn percent_is_capped_below_a_full_lap() {
        let mut snapshot = populated_snapshot();
        snapshot.scoring.scoring_info.lap_dist = 100.0;
        snapshot.scoring.vehicles[1].lap_dist = 150.0; // player slot
        let data = dataset(snapshot);

        assert_eq!(data.lap.percent(PLAYER), 0.99999);
    }

    #[test]
    fn percent_with_no_track_is_zero() {
        let mut snapshot = populated_snapshot();
        snapshot.scoring.scoring_info.lap_dist = 0.0;
        snapshot.scoring.vehicles[1].lap_dist = 500.0;
        let data = dataset(snapshot);

        assert_eq!(data.lap.percent(PLAYER), 0.0);
    }

    #[test]
    fn sector_index_clamps_then_remaps() {
        let mut snapshot = populated_snapshot();
        snapshot.scoring.vehicles[1].sector = 5; // out of range, clamps to 2
        let data = dataset(snapshot);

        assert_eq!(data.lap.sector_index(PLAYER), 1);
    }

    #[test]
    fn sector_index_covers_the_raw_order() {
        for (raw, canonical) in [(0i8, 2usize), (1, 0), (2, 1)] {
            let mut snapshot = populated_snapshot();
            snapshot.scoring.vehicles[1].sector = raw;
            assert_eq!(dataset(snapshot).lap.sector_index(PLAYER), canonical);
        }
    }

    #[test]
    fn current_laptime_is_a_live_duration() {
        let mut snapshot = populated_snapshot();
        snapshot.telemetry.vehicles[0].lap_start_et = 1000.0; // player telemetry slot
        snapshot.telemetry.vehicles[0].elapsed_time = 1042.5;
        let data = dataset(snapshot);

        assert_eq!(data.timing.current_laptime(PLAYER), 42.5);
    }

    #[test]
    fn unwritten_times_read_as_zero() {
        let mut snapshot = populated_snapshot();
        snapshot.scoring.vehicles[1].best_lap_time = f64::NAN;
        snapshot.scoring.vehicles[1].last_lap_time = f64::NAN;
        let data = dataset(snapshot);

        assert_eq!(data.timing.best_laptime(PLAYER), 0.0);
        assert_eq!(data.timing.last_laptime(PLAYER), 0.0);
    }
}
