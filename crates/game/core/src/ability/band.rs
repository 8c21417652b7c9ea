use core::fmt;

use crate::config::FilterConfig;

/// Inclusive `[low, high]` window a resource reading must fall in.
///
/// A reversed band (`low > high`) is representable and simply contains
/// nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReserveBand {
    pub low: u32,
    pub high: u32,
}

impl ReserveBand {
    /// Default MP band: any percentage.
    pub const FULL_PERCENT: Self = Self::new(0, FilterConfig::PERCENT_MAX);
    /// Default TP band: any TP value up to the cap.
    pub const FULL_TP: Self = Self::new(0, FilterConfig::TP_MAX);

    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Band matching exactly one value (e.g. a 1000 TP weaponskill tier).
    pub const fn exact(value: u32) -> Self {
        Self::new(value, value)
    }

    /// Both bounds are inclusive.
    #[inline]
    pub const fn contains(&self, value: u32) -> bool {
        self.low <= value && value <= self.high
    }

    pub const fn is_reversed(&self) -> bool {
        self.low > self.high
    }
}

impl fmt::Display for ReserveBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
