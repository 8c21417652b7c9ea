//! ResourceSnapshot - character resources at a point in time.
//!
//! The snapshot captures every reading the filter needs at one decision tick,
//! so a whole ability list is judged against the same state even if the live
//! character changes mid-evaluation.

use super::resources::{ResourceKind, percent_of};
use super::status::Status;

/// Immutable read of the controlled character's vitals.
///
/// Percentages are `0..=100`; `tp_current` is raw points (`0..=3000`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResourceSnapshot {
    /// Character name.
    pub name: String,

    /// Current activity state.
    pub status: Status,

    pub hp_current: u32,
    pub hp_percent: u32,

    pub mp_current: u32,
    pub mp_percent: u32,

    /// Raw TP points. There is no TP percentage.
    pub tp_current: u32,
}

impl ResourceSnapshot {
    /// Start a builder for the named character.
    pub fn builder(name: impl Into<String>) -> ResourceSnapshotBuilder {
        ResourceSnapshotBuilder::new(name)
    }

    /// Get HP (current, percent)
    pub fn hp(&self) -> (u32, u32) {
        (self.hp_current, self.hp_percent)
    }

    /// Get MP (current, percent)
    pub fn mp(&self) -> (u32, u32) {
        (self.mp_current, self.mp_percent)
    }

    /// Check if character is alive (HP > 0)
    pub fn is_alive(&self) -> bool {
        self.hp_current > 0 && self.status != Status::Dead
    }

    /// Absolute amount of `resource` available to pay a cost.
    pub fn current(&self, resource: ResourceKind) -> u32 {
        match resource {
            ResourceKind::Mp => self.mp_current,
            ResourceKind::Tp => self.tp_current,
        }
    }

    /// Reading a reserve band for `resource` is compared against.
    ///
    /// MP bands use `mp_percent`; TP bands use the absolute `tp_current`.
    pub fn reserve_reading(&self, resource: ResourceKind) -> u32 {
        match resource {
            ResourceKind::Mp => self.mp_percent,
            ResourceKind::Tp => self.tp_current,
        }
    }
}

/// Builder for constructing snapshots with a fluent API.
///
/// Defaults to a standing character with every reading at 0.
#[derive(Clone, Debug, Default)]
pub struct ResourceSnapshotBuilder {
    snapshot: ResourceSnapshot,
}

impl ResourceSnapshotBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            snapshot: ResourceSnapshot {
                name: name.into(),
                ..ResourceSnapshot::default()
            },
        }
    }

    pub fn status(mut self, status: Status) -> Self {
        self.snapshot.status = status;
        self
    }

    /// Set HP from an absolute value and an already-known percentage.
    pub fn hp(mut self, current: u32, percent: u32) -> Self {
        self.snapshot.hp_current = current;
        self.snapshot.hp_percent = percent;
        self
    }

    /// Set MP from an absolute value and an already-known percentage.
    pub fn mp(mut self, current: u32, percent: u32) -> Self {
        self.snapshot.mp_current = current;
        self.snapshot.mp_percent = percent;
        self
    }

    /// Set HP from current/maximum, deriving the percentage.
    pub fn hp_pool(self, current: u32, max: u32) -> Self {
        self.hp(current, percent_of(current, max))
    }

    /// Set MP from current/maximum, deriving the percentage.
    pub fn mp_pool(self, current: u32, max: u32) -> Self {
        self.mp(current, percent_of(current, max))
    }

    pub fn tp(mut self, current: u32) -> Self {
        self.snapshot.tp_current = current;
        self
    }

    pub fn build(self) -> ResourceSnapshot {
        self.snapshot
    }
}

/// Read-only source of character snapshots.
///
/// Implemented by whatever reads live game state. `None` means no reading is
/// available this tick; the filter turns that into a contract error only if a
/// resource check is actually reached.
pub trait SnapshotProvider {
    fn snapshot(&self) -> Option<ResourceSnapshot>;
}

impl SnapshotProvider for ResourceSnapshot {
    fn snapshot(&self) -> Option<ResourceSnapshot> {
        Some(self.clone())
    }
}

impl SnapshotProvider for Option<ResourceSnapshot> {
    fn snapshot(&self) -> Option<ResourceSnapshot> {
        self.clone()
    }
}

impl<P: SnapshotProvider + ?Sized> SnapshotProvider for &P {
    fn snapshot(&self) -> Option<ResourceSnapshot> {
        (**self).snapshot()
    }
}
