//! Resource kinds an ability can be gated on, and how each one is measured.

use crate::config::FilterConfig;

/// Resources an ability can cost or be reserve-gated on.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ResourceKind {
    /// Magic points - spent by spells.
    Mp,
    /// Tactical points - built up in melee, spent by weaponskills.
    Tp,
}

/// Scale a reserve band is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReserveScale {
    /// Percentage of the resource maximum, `0..=100`.
    Percent,
    /// Raw resource points, `0..=TP_MAX` for TP.
    Absolute,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Mp, ResourceKind::Tp];

    /// Scale this resource's reserve band is compared on.
    ///
    /// Operators think of MP as "percent of my pool" but of TP in absolute
    /// tiers (1000/2000/3000), so the two must never be swapped.
    pub const fn reserve_scale(self) -> ReserveScale {
        match self {
            ResourceKind::Mp => ReserveScale::Percent,
            ResourceKind::Tp => ReserveScale::Absolute,
        }
    }

    /// Largest value a reserve band for this resource can meaningfully hold.
    pub const fn reserve_max(self, config: &FilterConfig) -> u32 {
        match self.reserve_scale() {
            ReserveScale::Percent => FilterConfig::PERCENT_MAX,
            ReserveScale::Absolute => config.tp_ceiling,
        }
    }
}

/// Integer percentage of `current` over `max`, clamped to `0..=100`.
///
/// Returns 0 when `max` is 0 (a character with no MP pool has 0% MP).
pub const fn percent_of(current: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let percent = (current as u64 * FilterConfig::PERCENT_MAX as u64) / max as u64;
    if percent > FilterConfig::PERCENT_MAX as u64 {
        FilterConfig::PERCENT_MAX
    } else {
        percent as u32
    }
}
