//! Operator-authored ability configuration.

use bitflags::bitflags;

use super::band::ReserveBand;
use crate::config::FilterConfig;
use crate::error::ConfigIssue;
use crate::stats::ResourceKind;

/// One spell, job ability or weaponskill the operator wants used automatically.
///
/// The default value is a disabled, unnamed placeholder with no costs and
/// reserve bands spanning the full range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilityConfig {
    /// In-game name. Blank names mark an unused slot.
    pub name: String,

    /// Operator kill-switch.
    pub is_enabled: bool,

    /// MP spent on use; 0 means free.
    pub mp_cost: u32,

    /// TP spent on use; 0 means free.
    pub tp_cost: u32,

    /// MP percentage window the ability may fire in.
    pub mp_reserve: ReserveBand,

    /// Absolute TP window the ability may fire in.
    pub tp_reserve: ReserveBand,
}

impl Default for AbilityConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_enabled: false,
            mp_cost: 0,
            tp_cost: 0,
            mp_reserve: ReserveBand::FULL_PERCENT,
            tp_reserve: ReserveBand::FULL_TP,
        }
    }
}

impl AbilityConfig {
    /// Enabled ability with the given name and no costs or reserve limits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_enabled: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    #[must_use]
    pub fn with_mp_cost(mut self, cost: u32) -> Self {
        self.mp_cost = cost;
        self
    }

    #[must_use]
    pub fn with_tp_cost(mut self, cost: u32) -> Self {
        self.tp_cost = cost;
        self
    }

    /// Restrict use to MP percentages in `[low, high]`.
    #[must_use]
    pub fn with_mp_reserve(mut self, low: u32, high: u32) -> Self {
        self.mp_reserve = ReserveBand::new(low, high);
        self
    }

    /// Restrict use to absolute TP values in `[low, high]`.
    #[must_use]
    pub fn with_tp_reserve(mut self, low: u32, high: u32) -> Self {
        self.tp_reserve = ReserveBand::new(low, high);
        self
    }

    /// Returns true if the name is non-empty after trimming whitespace.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn cost(&self, resource: ResourceKind) -> u32 {
        match resource {
            ResourceKind::Mp => self.mp_cost,
            ResourceKind::Tp => self.tp_cost,
        }
    }

    pub fn reserve(&self, resource: ResourceKind) -> ReserveBand {
        match resource {
            ResourceKind::Mp => self.mp_reserve,
            ResourceKind::Tp => self.tp_reserve,
        }
    }

    /// Lint this configuration for an editor.
    ///
    /// The filter never calls this; a configuration with issues is still
    /// evaluated exactly as written.
    pub fn validate(&self, config: &FilterConfig) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !self.has_name() {
            issues.push(ConfigIssue::BlankName);
        }

        for resource in ResourceKind::ALL {
            let band = self.reserve(resource);
            let max = resource.reserve_max(config);

            if band.is_reversed() {
                issues.push(ConfigIssue::ReversedReserve { resource, band });
            }
            if band.high > max {
                issues.push(ConfigIssue::ReserveAboveMax {
                    resource,
                    band,
                    max,
                });
            }
        }

        if self.tp_cost > config.tp_ceiling {
            issues.push(ConfigIssue::CostAboveMax {
                resource: ResourceKind::Tp,
                cost: self.tp_cost,
                max: config.tp_ceiling,
            });
        }

        issues
    }
}

bitflags! {
    /// Which fields of an [`AbilityConfig`] changed in an edit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct AbilityFields: u8 {
        const NAME       = 1 << 0;
        const ENABLED    = 1 << 1;
        const MP_COST    = 1 << 2;
        const TP_COST    = 1 << 3;
        const MP_RESERVE = 1 << 4;
        const TP_RESERVE = 1 << 5;
    }
}

impl AbilityFields {
    /// Fields that differ between `before` and `after`.
    pub fn diff(before: &AbilityConfig, after: &AbilityConfig) -> Self {
        let mut fields = Self::empty();
        fields.set(Self::NAME, before.name != after.name);
        fields.set(Self::ENABLED, before.is_enabled != after.is_enabled);
        fields.set(Self::MP_COST, before.mp_cost != after.mp_cost);
        fields.set(Self::TP_COST, before.tp_cost != after.tp_cost);
        fields.set(Self::MP_RESERVE, before.mp_reserve != after.mp_reserve);
        fields.set(Self::TP_RESERVE, before.tp_reserve != after.tp_reserve);
        fields
    }
}
