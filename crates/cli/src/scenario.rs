//! Scenario files: one snapshot plus one ability list.
//!
//! The format is picked from the file extension (`.toml` or `.ron`).
//!
//! ```toml
//! [snapshot]
//! name = "Mykezero"
//! mp_current = 420
//! mp_percent = 70
//! tp_current = 1200
//!
//! [list]
//! name = "Weaponskills"
//!
//! [[list.actions]]
//! name = "Savage Blade"
//! is_enabled = true
//! tp_cost = 1000
//! tp_reserve = { low = 1000, high = 3000 }
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use farm_core::{BattleList, FilterConfig, ResourceSnapshot};
use serde::Deserialize;

/// A recorded decision tick.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Ceilings used by `lint`.
    #[serde(default)]
    pub config: FilterConfig,

    /// Character state; omitted to exercise the missing-snapshot path.
    #[serde(default)]
    pub snapshot: Option<ResourceSnapshot>,

    pub list: BattleList,
}

/// Scenario encodings, keyed by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioFormat {
    Toml,
    Ron,
}

impl ScenarioFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(Self::Ron),
            _ => bail!(
                "Unsupported scenario file {}: expected a .toml or .ron extension",
                path.display()
            ),
        }
    }
}

impl Scenario {
    /// Load a scenario, choosing the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ScenarioFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file: {}", path.display()))?;

        let scenario = Self::parse(&content, format)
            .with_context(|| format!("Failed to parse scenario file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            list = scenario.list.name(),
            abilities = scenario.list.len(),
            has_snapshot = scenario.snapshot.is_some(),
            "Loaded scenario"
        );
        Ok(scenario)
    }

    pub fn parse(content: &str, format: ScenarioFormat) -> Result<Self> {
        let scenario: Self = match format {
            ScenarioFormat::Toml => toml::from_str(content)?,
            ScenarioFormat::Ron => ron::from_str(content)?,
        };
        Ok(scenario)
    }
}
