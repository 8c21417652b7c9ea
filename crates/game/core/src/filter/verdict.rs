//! Filter outcomes.

use core::fmt;

use super::check::CheckKind;
use crate::ability::ReserveBand;
use crate::stats::{ReserveScale, ResourceKind};

/// Outcome of evaluating one ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every check passed.
    Usable,
    /// A check failed; later checks were not run.
    Rejected(Rejection),
}

impl Verdict {
    /// `Usable` if `passed`, otherwise `Rejected(rejection)`.
    #[inline]
    pub const fn require(passed: bool, rejection: Rejection) -> Self {
        if passed {
            Self::Usable
        } else {
            Self::Rejected(rejection)
        }
    }

    pub const fn is_usable(&self) -> bool {
        matches!(self, Self::Usable)
    }

    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Usable => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Why an ability was disqualified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Operator switched the ability off.
    Disabled,

    /// Name is empty after trimming.
    Unnamed,

    /// Not enough of `resource` to pay the cost.
    Unaffordable {
        resource: ResourceKind,
        cost: u32,
        available: u32,
    },

    /// `reading` is outside the operator's reserve band for `resource`.
    OutsideReserve {
        resource: ResourceKind,
        reading: u32,
        band: ReserveBand,
    },

    /// Rejected by a caller-supplied filter.
    Custom(&'static str),
}

impl Rejection {
    /// The built-in check that produced this rejection, if any.
    pub const fn check(&self) -> Option<CheckKind> {
        match self {
            Self::Disabled => Some(CheckKind::Enabled),
            Self::Unnamed => Some(CheckKind::Named),
            Self::Unaffordable { resource, .. } => Some(CheckKind::affordability(*resource)),
            Self::OutsideReserve { resource, .. } => Some(CheckKind::reserve(*resource)),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Unnamed => write!(f, "blank name"),
            Self::Unaffordable {
                resource,
                cost,
                available,
            } => write!(f, "needs {cost} {resource}, has {available}"),
            Self::OutsideReserve {
                resource,
                reading,
                band,
            } => match resource.reserve_scale() {
                ReserveScale::Percent => {
                    write!(f, "{resource} {reading}% outside reserve {band}")
                }
                ReserveScale::Absolute => {
                    write!(f, "{resource} {reading} outside reserve {band}")
                }
            },
            Self::Custom(reason) => write!(f, "{reason}"),
        }
    }
}
