//! Ability configuration authored by the operator.
//!
//! - [`AbilityConfig`]: one candidate action with its costs and reserve bands
//! - [`ReserveBand`]: inclusive resource window
//! - [`BattleList`]: ordered, observable list of candidates

pub mod band;
pub mod config;
pub mod list;

pub use band::ReserveBand;
pub use config::{AbilityConfig, AbilityFields};
pub use list::{BattleList, DEFAULT_ABILITY_NAME, ListEvent, SubscriptionId};
