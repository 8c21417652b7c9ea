//! Character resource state as seen by the filter.
//!
//! A [`ResourceSnapshot`] is an immutable read of the controlled character at
//! one evaluation instant. It is produced by an external telemetry source
//! (anything implementing [`SnapshotProvider`]) and only ever read here.
//!
//! ## Reserve scales
//!
//! The two gated resources are read on different scales:
//!
//! - **MP** reserve bands compare against MP as a percentage of maximum
//! - **TP** reserve bands compare against raw TP points
//!
//! [`ResourceSnapshot::reserve_reading`] is the single place that maps a
//! [`ResourceKind`] to the reading its reserve band is compared with.

pub mod resources;
pub mod snapshot;
pub mod status;

pub use resources::{ReserveScale, ResourceKind, percent_of};
pub use snapshot::{ResourceSnapshot, ResourceSnapshotBuilder, SnapshotProvider};
pub use status::Status;
