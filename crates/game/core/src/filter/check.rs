//! The six built-in checks and the [`Filter`] trait they implement.

use super::verdict::{Rejection, Verdict};
use crate::ability::AbilityConfig;
use crate::error::FilterError;
use crate::stats::{ResourceKind, ResourceSnapshot};

/// Inputs to one evaluation.
///
/// The snapshot is only reachable through [`FilterContext::snapshot`], which
/// fails with [`FilterError::MissingSnapshot`] when it is absent. Checks that
/// do not need resources never touch it.
#[derive(Clone, Copy, Debug)]
pub struct FilterContext<'a> {
    snapshot: Option<&'a ResourceSnapshot>,
    ability: &'a AbilityConfig,
}

impl<'a> FilterContext<'a> {
    pub const fn new(snapshot: Option<&'a ResourceSnapshot>, ability: &'a AbilityConfig) -> Self {
        Self { snapshot, ability }
    }

    pub const fn ability(&self) -> &'a AbilityConfig {
        self.ability
    }

    /// The snapshot, required by `check`.
    pub fn snapshot(&self, check: CheckKind) -> Result<&'a ResourceSnapshot, FilterError> {
        self.snapshot.ok_or(FilterError::MissingSnapshot { check })
    }

    /// The snapshot, required by a caller-supplied filter.
    pub const fn try_snapshot(&self) -> Option<&'a ResourceSnapshot> {
        self.snapshot
    }
}

/// A predicate over one ability and the character's resources.
///
/// Filters must be pure: same context, same verdict, no side effects.
pub trait Filter: Send + Sync {
    /// Evaluate against `ctx`.
    ///
    /// Disqualification is `Ok(Verdict::Rejected(..))`; `Err` is reserved for
    /// contract violations.
    fn check(&self, ctx: &FilterContext<'_>) -> Result<Verdict, FilterError>;
}

/// Blanket implementation for boxed filters.
impl Filter for Box<dyn Filter> {
    #[inline]
    fn check(&self, ctx: &FilterContext<'_>) -> Result<Verdict, FilterError> {
        (**self).check(ctx)
    }
}

/// Built-in checks, in evaluation order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum CheckKind {
    /// Operator kill-switch is on.
    Enabled,
    /// Name is non-blank after trimming.
    Named,
    /// `mp_current >= mp_cost` when the ability costs MP.
    MpAffordable,
    /// `tp_current >= tp_cost` when the ability costs TP.
    TpAffordable,
    /// `mp_percent` within the MP reserve band, always.
    MpReserve,
    /// Absolute `tp_current` within the TP reserve band, always.
    TpReserve,
}

impl CheckKind {
    /// Every check in evaluation order.
    pub const ALL: [CheckKind; 6] = [
        CheckKind::Enabled,
        CheckKind::Named,
        CheckKind::MpAffordable,
        CheckKind::TpAffordable,
        CheckKind::MpReserve,
        CheckKind::TpReserve,
    ];

    pub const fn affordability(resource: ResourceKind) -> Self {
        match resource {
            ResourceKind::Mp => Self::MpAffordable,
            ResourceKind::Tp => Self::TpAffordable,
        }
    }

    pub const fn reserve(resource: ResourceKind) -> Self {
        match resource {
            ResourceKind::Mp => Self::MpReserve,
            ResourceKind::Tp => Self::TpReserve,
        }
    }

    /// Returns true if this check may read the snapshot.
    pub const fn requires_snapshot(&self) -> bool {
        !matches!(self, Self::Enabled | Self::Named)
    }

    fn affordable(
        self,
        ctx: &FilterContext<'_>,
        resource: ResourceKind,
    ) -> Result<Verdict, FilterError> {
        let cost = ctx.ability().cost(resource);
        if cost == 0 {
            return Ok(Verdict::Usable);
        }

        let available = ctx.snapshot(self)?.current(resource);
        Ok(Verdict::require(
            available >= cost,
            Rejection::Unaffordable {
                resource,
                cost,
                available,
            },
        ))
    }

    fn within_reserve(
        self,
        ctx: &FilterContext<'_>,
        resource: ResourceKind,
    ) -> Result<Verdict, FilterError> {
        let band = ctx.ability().reserve(resource);
        let reading = ctx.snapshot(self)?.reserve_reading(resource);
        Ok(Verdict::require(
            band.contains(reading),
            Rejection::OutsideReserve {
                resource,
                reading,
                band,
            },
        ))
    }
}

impl Filter for CheckKind {
    fn check(&self, ctx: &FilterContext<'_>) -> Result<Verdict, FilterError> {
        let ability = ctx.ability();
        match self {
            Self::Enabled => Ok(Verdict::require(ability.is_enabled, Rejection::Disabled)),
            Self::Named => Ok(Verdict::require(ability.has_name(), Rejection::Unnamed)),
            Self::MpAffordable => self.affordable(ctx, ResourceKind::Mp),
            Self::TpAffordable => self.affordable(ctx, ResourceKind::Tp),
            Self::MpReserve => self.within_reserve(ctx, ResourceKind::Mp),
            Self::TpReserve => self.within_reserve(ctx, ResourceKind::Tp),
        }
    }
}
