//! The snapshot access seam between transport and adapters.
//!
//! How the shared-memory block is opened and kept refreshed belongs to an
//! external transport (memory mapping, triple-buffer copying, process
//! discovery). This module defines only what the adapter layer needs from
//! it: read access to the latest completed copy of each page.
//!
//! # Consistency contract
//!
//! Implementations must return the most recent *completed* copy of each
//! region they hold. The producer refreshes regions at independent cadences
//! with no coordination signal, so two calls (or two fields read within one
//! call) may observe state that never co-existed in the simulation. The
//! adapter layer tolerates that by design; sources are not expected to
//! provide cross-region atomicity, and must never block.

use crate::pages::{ExtendedPage, ForceFeedbackPage, ScoringPage, TelemetryPage};

/// Read access to the current snapshot pages.
///
/// Implemented by transports for live data and by [`StaticSnapshot`] for
/// fixtures and offline analysis.
pub trait SnapshotSource {
    /// The telemetry region: per-vehicle physics state.
    fn telemetry(&self) -> &TelemetryPage;

    /// The scoring region: per-vehicle race state and session info.
    fn scoring(&self) -> &ScoringPage;

    /// The extended region: session-scoped values.
    fn extended(&self) -> &ExtendedPage;

    /// The force-feedback region.
    fn force_feedback(&self) -> &ForceFeedbackPage;
}

/// An owned, unchanging snapshot of all four regions.
///
/// Useful as a test fixture, for replaying captured pages, and as the
/// "nothing attached yet" placeholder (its default is the producer's
/// all-zero pre-write state).
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshot {
    pub telemetry: TelemetryPage,
    pub scoring: ScoringPage,
    pub extended: ExtendedPage,
    pub force_feedback: ForceFeedbackPage,
}

impl SnapshotSource for StaticSnapshot {
    fn telemetry(&self) -> &TelemetryPage {
        &self.telemetry
    }

    fn scoring(&self) -> &ScoringPage {
        &self.scoring
    }

    fn extended(&self) -> &ExtendedPage {
        &self.extended
    }

    fn force_feedback(&self) -> &ForceFeedbackPage {
        &self.force_feedback
    }
}
