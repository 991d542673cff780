//! Session clock and weather accessors.

use super::Reader;
use crate::raw::RawValue;

/// Session clock times, seconds.
#[derive(Clone)]
pub struct Session {
    reader: Reader,
}

impl Session {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Session time elapsed.
    pub fn elapsed(&self) -> f64 {
        self.reader.scoring().scoring_info.current_et.sample().unwrap_or_default()
    }

    /// Session clock value at the official start.
    pub fn start(&self) -> f64 {
        self.reader.scoring().scoring_info.start_et.sample().unwrap_or_default()
    }

    /// Scheduled session end.
    pub fn end(&self) -> f64 {
        self.reader.scoring().scoring_info.end_et.sample().unwrap_or_default()
    }

    /// Session time remaining.
    pub fn remaining(&self) -> f64 {
        self.end() - self.elapsed()
    }
}

/// Weather and track surface conditions.
#[derive(Clone)]
pub struct Weather {
    reader: Reader,
}

impl Weather {
    pub(crate) fn new(reader: Reader) -> Self {
        Self { reader }
    }

    /// Track surface temperature, Celsius.
    pub fn track_temp(&self) -> f64 {
        self.reader.scoring().scoring_info.track_temp.sample().unwrap_or_default()
    }

    /// Ambient temperature, Celsius.
    pub fn ambient_temp(&self) -> f64 {
        self.reader.scoring().scoring_info.ambient_temp.sample().unwrap_or_default()
    }

    /// Rain severity fraction, 0.0..=1.0.
    pub fn raininess(&self) -> f64 {
        self.reader.scoring().scoring_info.raining.sample().unwrap_or_default()
    }

    /// Path wetness as (min, max, average) fractions.
    pub fn wetness(&self) -> (f64, f64, f64) {
        let info = &self.reader.scoring().scoring_info;
        (
            info.min_path_wetness.sample().unwrap_or_default(),
            info.max_path_wetness.sample().unwrap_or_default(),
            info.avg_path_wetness.sample().unwrap_or_default(),
        )
    }
}
