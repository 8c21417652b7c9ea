//! Ability usability rules for automated play.
//!
//! `farm-core` decides whether a configured ability may be used right now,
//! given a snapshot of the controlled character's resources. The decision is
//! a pure function of ([`ResourceSnapshot`], [`AbilityConfig`]) exposed by
//! [`filter::is_usable`] and [`filter::evaluate`]; nothing here performs I/O
//! or holds state between calls.
//!
//! Supporting types:
//! - [`BattleList`]: the operator's ordered, observable list of abilities
//! - [`SnapshotProvider`]: read-only hook for a live telemetry source
//! - [`FilterConfig`]: resource ceilings used by editor-side validation
pub mod ability;
pub mod config;
pub mod error;
pub mod filter;
pub mod stats;

pub use ability::{
    AbilityConfig, AbilityFields, BattleList, DEFAULT_ABILITY_NAME, ListEvent, ReserveBand,
    SubscriptionId,
};
pub use config::FilterConfig;
pub use error::{ConfigIssue, CoreError, ErrorSeverity, FilterError, ListError};
pub use filter::{
    CheckKind, Filter, FilterChain, FilterContext, FnFilter, Rejection, Verdict, evaluate,
    is_usable,
};
pub use stats::{
    ReserveScale, ResourceKind, ResourceSnapshot, ResourceSnapshotBuilder, SnapshotProvider,
    Status, percent_of,
};
