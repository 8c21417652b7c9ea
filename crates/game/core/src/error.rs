//! Common error infrastructure for farm-core.
//!
//! Disqualifying an ability is not an error: the filter reports it as a
//! [`Verdict`](crate::filter::Verdict). The types here cover the remaining
//! failure classes:
//!
//! - [`FilterError`]: the caller broke the evaluation contract
//! - [`ConfigIssue`]: editor-side lint findings on an ability configuration
//! - [`ListError`]: out-of-range edits on a [`BattleList`](crate::BattleList)

use crate::ability::ReserveBand;
use crate::filter::CheckKind;
use crate::stats::ResourceKind;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can continue with another candidate
/// - **Validation**: invalid input that should be fixed before retrying
/// - **Internal**: a caller bug; retrying with the same inputs cannot succeed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the decision loop can move on.
    Recoverable,

    /// Validation error - input must change before it is accepted.
    Validation,

    /// Internal error - programming contract violated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a caller bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all farm-core errors.
///
/// Gives tools a uniform way to classify and tag errors without matching on
/// every concrete type.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

// ============================================================================
// Filter Errors
// ============================================================================

/// Contract violations raised while evaluating an ability.
///
/// These are never produced for a normal disqualification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// A check that reads character resources was reached without a snapshot.
    ///
    /// Enablement and name checks run without a snapshot; every later check
    /// requires one.
    #[error("invalid input: `{check}` check requires a resource snapshot")]
    MissingSnapshot { check: CheckKind },
}

impl CoreError for FilterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingSnapshot { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSnapshot { .. } => "FILTER_MISSING_SNAPSHOT",
        }
    }
}

// ============================================================================
// Configuration Issues
// ============================================================================

/// Problems an ability editor should surface to the operator.
///
/// The filter accepts every configuration as-is (a reversed band simply never
/// matches), so these are advisory and only produced by
/// [`AbilityConfig::validate`](crate::AbilityConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    #[error("ability name is blank; entry will never be used")]
    BlankName,

    #[error("{resource} reserve band {band} is reversed; ability will never be used")]
    ReversedReserve {
        resource: ResourceKind,
        band: ReserveBand,
    },

    #[error("{resource} reserve band {band} exceeds the maximum of {max}")]
    ReserveAboveMax {
        resource: ResourceKind,
        band: ReserveBand,
        max: u32,
    },

    #[error("{resource} cost {cost} exceeds the maximum of {max}")]
    CostAboveMax {
        resource: ResourceKind,
        cost: u32,
        max: u32,
    },
}

impl CoreError for ConfigIssue {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BlankName => "CONFIG_BLANK_NAME",
            Self::ReversedReserve { .. } => "CONFIG_REVERSED_RESERVE",
            Self::ReserveAboveMax { .. } => "CONFIG_RESERVE_ABOVE_MAX",
            Self::CostAboveMax { .. } => "CONFIG_COST_ABOVE_MAX",
        }
    }
}

// ============================================================================
// List Errors
// ============================================================================

/// Errors from editing a [`BattleList`](crate::BattleList).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("index {index} out of range for list of {len} abilities")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CoreError for ListError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "LIST_INDEX_OUT_OF_RANGE",
        }
    }
}
