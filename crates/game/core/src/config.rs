/// Resource ceilings used by the editor-side lint and by default reserve bands.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterConfig {
    /// Highest TP value the character can hold.
    /// Reserve bands and costs above this are reported by
    /// [`AbilityConfig::validate`](crate::AbilityConfig::validate).
    pub tp_ceiling: u32,
}

impl FilterConfig {
    // ===== compile-time constants =====
    /// Upper bound of any percentage reading (HP%, MP%).
    pub const PERCENT_MAX: u32 = 100;
    /// Game-wide TP cap. Default TP reserve bands span `[0, TP_MAX]`.
    pub const TP_MAX: u32 = 3000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TP_CEILING: u32 = Self::TP_MAX;

    pub fn new() -> Self {
        Self {
            tp_ceiling: Self::DEFAULT_TP_CEILING,
        }
    }

    pub fn with_tp_ceiling(tp_ceiling: u32) -> Self {
        Self { tp_ceiling }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new()
    }
}
