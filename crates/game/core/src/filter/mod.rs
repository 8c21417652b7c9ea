//! Action filter - decides whether an ability may be used right now.
//!
//! Six checks run in a fixed order, each short-circuiting the rest:
//!
//! 1. **Enabled**: the operator has not switched the ability off
//! 2. **Named**: the name is non-blank after trimming
//! 3. **MP affordable**: `mp_current >= mp_cost` (skipped when free)
//! 4. **TP affordable**: `tp_current >= tp_cost` (skipped when free)
//! 5. **MP reserve**: `mp_percent` within the MP band
//! 6. **TP reserve**: absolute `tp_current` within the TP band
//!
//! Reserve checks always run, whatever the cost: they express "never fire
//! anything while my MP/TP is outside this window", not affordability.
//!
//! Checks 1 and 2 need no snapshot, so a disabled or blank entry is rejected
//! even when no resource reading exists. Reaching any later check without a
//! snapshot is a contract violation reported as [`FilterError::MissingSnapshot`].
//!
//! Everything here is pure and allocation-free; evaluations may run
//! concurrently on any number of threads.

pub mod chain;
pub mod check;
pub mod verdict;

pub use chain::{FilterChain, FnFilter};
pub use check::{CheckKind, Filter, FilterContext};
pub use verdict::{Rejection, Verdict};

use crate::ability::AbilityConfig;
use crate::error::FilterError;
use crate::stats::ResourceSnapshot;

/// Evaluate `ability` against `snapshot`, reporting why it was rejected.
pub fn evaluate(
    snapshot: Option<&ResourceSnapshot>,
    ability: &AbilityConfig,
) -> Result<Verdict, FilterError> {
    let ctx = FilterContext::new(snapshot, ability);

    for check in CheckKind::ALL {
        let verdict = check.check(&ctx)?;
        if let Verdict::Rejected(rejection) = verdict {
            tracing::trace!(
                ability = %ability.name,
                %check,
                %rejection,
                "ability rejected"
            );
            return Ok(verdict);
        }
    }
    Ok(Verdict::Usable)
}

/// Returns `Ok(true)` iff every check passes.
///
/// `Ok(false)` is a normal disqualification; `Err` means the caller withheld
/// the snapshot from an ability that needed it.
pub fn is_usable(
    snapshot: Option<&ResourceSnapshot>,
    ability: &AbilityConfig,
) -> Result<bool, FilterError> {
    evaluate(snapshot, ability).map(|verdict| verdict.is_usable())
}
