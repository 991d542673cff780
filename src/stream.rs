//! Polling helpers for change-driven consumers.
//!
//! The adapter layer itself is a pure pull surface; widgets poll it at
//! whatever cadence suits them. The one signal that is awkward to poll by
//! hand is session identity: a display layer keyed to "this session" must
//! notice the [`SessionId`] stamp moving and flush its caches. This module
//! wraps that polling loop into an async [`Stream`] of [`SessionChange`]
//! events. It introduces no locks and no writes; it is just a timer around
//! the same live reads every other consumer performs.

use std::time::Duration;

use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::IntervalStream;
use tracing::debug;

use crate::data::{DataSet, SessionId};

/// Scoring region refresh cadence, the natural rate for session watching.
const SCORING_REFRESH: Duration = Duration::from_millis(200);

/// Telemetry region refresh cadence.
const TELEMETRY_REFRESH: Duration = Duration::from_millis(20);

/// Polling rate for snapshot-derived streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateRate {
    /// Poll at the scoring refresh cadence (~5 Hz).
    Scoring,
    /// Poll at the telemetry refresh cadence (~50 Hz).
    Native,
    /// Poll at most this many times per second.
    Max(u32),
}

impl UpdateRate {
    /// The polling period for this rate.
    ///
    /// `Max(0)` is nonsensical and is treated as `Max(1)`.
    pub fn period(self) -> Duration {
        match self {
            UpdateRate::Scoring => SCORING_REFRESH,
            UpdateRate::Native => TELEMETRY_REFRESH,
            UpdateRate::Max(hz) => Duration::from_secs_f64(1.0 / f64::from(hz.max(1))),
        }
    }
}

/// A session configuration change observed between two polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionChange {
    /// The identity before the change; `None` for the first observation.
    pub previous: Option<SessionId>,
    /// The identity now in effect.
    pub current: SessionId,
}

/// Watch the session stamp, yielding whenever it changes.
///
/// The first poll always yields (with `previous: None`) so consumers can
/// initialize from the stream alone. Elapsed time and lap count move within
/// a session without changing the stamp; only a stamp change (a different
/// session length or type) produces an event.
pub fn watch_session(data: DataSet, rate: UpdateRate) -> impl Stream<Item = SessionChange> {
    let mut ticker = tokio::time::interval(rate.period());
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut last: Option<SessionId> = None;
    IntervalStream::new(ticker).filter_map(move |_| {
        let current = data.state.session();
        let event = last
            .is_none_or(|prev| prev.stamp != current.stamp)
            .then(|| SessionChange { previous: last, current });
        if let Some(change) = event {
            debug!(stamp = change.current.stamp, "session stamp changed");
            last = Some(current);
        }
        futures::future::ready(event)
    })
}
