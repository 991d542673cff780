//! Type-safe Rust library for rFactor 2 shared-memory telemetry data.
//!
//! Paddock reads the versioned shared-memory block published by the
//! simulation's telemetry plugin and exposes it as stable, typed,
//! per-vehicle accessors suitable for high-frequency display widgets.
//!
//! # Features
//!
//! - **Sentinel safety**: fields the producer has not written yet read as
//!   documented defaults, never as garbage or a panic
//! - **Slot resolution**: scoring and telemetry arrays are paired by stable
//!   vehicle id on every call, tolerating frame-to-frame reordering
//! - **Normalized units**: m/s, Celsius, canonical sector order and a
//!   forward/left/up world convention at every accessor boundary
//! - **Never-fail accessors**: a display layer polling between sessions or
//!   before the producer attaches sees defaults, not errors
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use paddock::{DataSet, StaticSnapshot, VehicleQuery};
//!
//! // A transport normally supplies the live source; fixtures work the same.
//! let data = DataSet::new(Arc::new(StaticSnapshot::default()));
//!
//! let player = VehicleQuery::LocalPlayer;
//! let speed = data.vehicle.speed(player);
//! let gear = data.engine.gear(player);
//! let lap = data.lap.percent(player);
//! assert_eq!((speed, gear, lap), (0.0, 0, 0.0));
//! ```
//!
//! # Watching for session changes
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use paddock::{DataSet, StaticSnapshot, UpdateRate, watch_session};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let data = DataSet::new(Arc::new(StaticSnapshot::default()));
//! let mut sessions = Box::pin(watch_session(data, UpdateRate::Scoring));
//!
//! while let Some(change) = sessions.next().await {
//!     println!("session stamp is now {}", change.current.stamp);
//! }
//! # }
//! ```

// Core types and error handling
pub mod convert;
pub mod data;
mod error;
pub mod pages;
pub mod raw;
mod resolve;
mod source;
pub mod text;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

// Stream-based consumer plumbing
pub mod stream;

// Core exports
pub use data::{
    Brake, DataSet, ElectricMotor, Engine, Input, Lap, Session, SessionId, State, Suspension,
    Switch, Timing, Tyre, Vehicle, Weather, Wheel, WheelLayerTemps,
};
pub use error::{Result, TelemetryError};
pub use pages::{
    ExtendedPage, ForceFeedbackPage, ScoringInfo, ScoringPage, TelemetryPage, Vec3,
    VehicleScoring, VehicleTelemetry, WheelTelemetry,
};
pub use raw::RawValue;
pub use resolve::{VehicleHandle, VehicleQuery, VehicleResolver};
pub use source::{SnapshotSource, StaticSnapshot};
pub use stream::{SessionChange, UpdateRate, watch_session};
