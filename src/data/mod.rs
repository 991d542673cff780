//! Category adapters: the typed accessor surface over the live snapshot.
//!
//! A [`DataSet`] aggregates one stateless adapter per semantic category
//! (engine, lap, timing, tyres, ...). Every accessor is a pure function of
//! the current snapshot state plus an optional vehicle request, re-read live
//! on each call. The adapters hold no copies and no caches.
//!
//! # The never-fail contract
//!
//! No accessor panics or returns a `Result`. A field the producer has not
//! written, a vehicle slot that does not exist, or a torn page all degrade
//! to the accessor's documented default: `0` for numbers, `""` for text,
//! `false` for conditions, and a zero-filled fixed-size array for per-wheel
//! or per-layer values. Display layers poll these accessors at high
//! frequency and must never stall on transient gaps (session transitions,
//! loading screens, a producer that has not attached yet).

mod chassis;
mod engine;
mod input;
mod lap;
mod session;
mod state;
mod vehicle;

pub use chassis::{Brake, Suspension, Tyre, Wheel, WheelLayerTemps};
pub use engine::{ElectricMotor, Engine};
pub use input::{Input, Switch};
pub use lap::{Lap, Timing};
pub use session::{Session, Weather};
pub use state::{SessionId, State};
pub use vehicle::Vehicle;

use std::sync::Arc;

use crate::pages::{
    ExtendedPage, ForceFeedbackPage, ScoringPage, TelemetryPage, VehicleScoring,
    VehicleTelemetry, WHEEL_COUNT, WheelTelemetry,
};
use crate::raw::RawValue;
use crate::resolve::{VehicleQuery, VehicleResolver};
use crate::source::SnapshotSource;
use crate::text;

/// Shared plumbing for the category adapters.
///
/// Combines the snapshot source with per-call vehicle resolution and the
/// default-on-unavailable read helpers every adapter builds on.
#[derive(Clone)]
pub(crate) struct Reader {
    source: Arc<dyn SnapshotSource + Send + Sync>,
}

impl Reader {
    fn new(source: Arc<dyn SnapshotSource + Send + Sync>) -> Self {
        Self { source }
    }

    pub(crate) fn telemetry(&self) -> &TelemetryPage {
        self.source.telemetry()
    }

    pub(crate) fn scoring(&self) -> &ScoringPage {
        self.source.scoring()
    }

    pub(crate) fn extended(&self) -> &ExtendedPage {
        self.source.extended()
    }

    pub(crate) fn force_feedback(&self) -> &ForceFeedbackPage {
        self.source.force_feedback()
    }

    /// Fresh resolver over the current page state.
    pub(crate) fn resolver(&self) -> VehicleResolver<'_> {
        VehicleResolver::new(self.telemetry(), self.scoring())
    }

    /// The scoring slot for a request, if any.
    pub(crate) fn scor_veh(&self, veh: VehicleQuery) -> Option<&VehicleScoring> {
        let slot = self.resolver().resolve(veh).scoring_slot?;
        self.scoring().vehicle(slot)
    }

    /// The telemetry slot for a request, if any.
    pub(crate) fn tele_veh(&self, veh: VehicleQuery) -> Option<&VehicleTelemetry> {
        let slot = self.resolver().resolve(veh).telemetry_slot?;
        self.telemetry().vehicle(slot)
    }

    /// Sentinel-filtered scalar read from a telemetry slot.
    pub(crate) fn tele<R: RawValue>(
        &self,
        veh: VehicleQuery,
        field: impl FnOnce(&VehicleTelemetry) -> R,
    ) -> R::Norm
    where
        R::Norm: Default,
    {
        self.tele_veh(veh).and_then(|v| field(v).sample()).unwrap_or_default()
    }

    /// Sentinel-filtered scalar read from a scoring slot.
    pub(crate) fn scor<R: RawValue>(
        &self,
        veh: VehicleQuery,
        field: impl FnOnce(&VehicleScoring) -> R,
    ) -> R::Norm
    where
        R::Norm: Default,
    {
        self.scor_veh(veh).and_then(|v| field(v).sample()).unwrap_or_default()
    }

    /// Per-wheel read, zero-filled when the vehicle is unavailable.
    pub(crate) fn tele_wheels<R: RawValue>(
        &self,
        veh: VehicleQuery,
        field: impl Fn(&WheelTelemetry) -> R,
    ) -> [R::Norm; WHEEL_COUNT]
    where
        R::Norm: Default + Copy,
    {
        match self.tele_veh(veh) {
            Some(v) => std::array::from_fn(|i| field(&v.wheels[i]).sample().unwrap_or_default()),
            None => [R::Norm::default(); WHEEL_COUNT],
        }
    }

    /// Decoded text read from a scoring slot, empty when unavailable.
    pub(crate) fn scor_text(
        &self,
        veh: VehicleQuery,
        field: impl for<'v> FnOnce(&'v VehicleScoring) -> &'v [u8],
    ) -> String {
        self.scor_veh(veh).map(|v| text::decode(field(v))).unwrap_or_default()
    }
}

/// One instance of every category adapter over a shared snapshot source.
///
/// Constructed once per attached session and handed to consumers; the
/// adapters are stateless, so the set is cheap to clone and safe to share.
///
/// ```rust
/// use std::sync::Arc;
/// use paddock::{DataSet, StaticSnapshot, VehicleQuery};
///
/// let data = DataSet::new(Arc::new(StaticSnapshot::default()));
/// // Nothing attached yet: every accessor yields its documented default.
/// assert_eq!(data.engine.rpm(VehicleQuery::LocalPlayer), 0.0);
/// assert_eq!(data.vehicle.driver_name(VehicleQuery::LocalPlayer), "");
/// ```
#[derive(Clone)]
pub struct DataSet {
    pub state: State,
    pub brake: Brake,
    pub emotor: ElectricMotor,
    pub engine: Engine,
    pub input: Input,
    pub lap: Lap,
    pub session: Session,
    pub suspension: Suspension,
    pub switch: Switch,
    pub timing: Timing,
    pub tyre: Tyre,
    pub vehicle: Vehicle,
    pub weather: Weather,
    pub wheel: Wheel,
}

impl DataSet {
    /// Build the adapter set over a snapshot source.
    pub fn new(source: Arc<dyn SnapshotSource + Send + Sync>) -> Self {
        let reader = Reader::new(source);
        Self {
            state: State::new(reader.clone()),
            brake: Brake::new(reader.clone()),
            emotor: ElectricMotor::new(reader.clone()),
            engine: Engine::new(reader.clone()),
            input: Input::new(reader.clone()),
            lap: Lap::new(reader.clone()),
            session: Session::new(reader.clone()),
            suspension: Suspension::new(reader.clone()),
            switch: Switch::new(reader.clone()),
            timing: Timing::new(reader.clone()),
            tyre: Tyre::new(reader.clone()),
            vehicle: Vehicle::new(reader.clone()),
            weather: Weather::new(reader.clone()),
            wheel: Wheel::new(reader),
        }
    }
}
