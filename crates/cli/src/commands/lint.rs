//! Report configuration mistakes an editor would flag.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use farm_core::{ConfigIssue, CoreError};

use crate::scenario::Scenario;

/// Check every ability for reversed or out-of-range settings
#[derive(Parser)]
pub struct Lint {
    /// Scenario file (.toml or .ron)
    #[arg(value_name = "SCENARIO", env = "FARM_SCENARIO")]
    scenario: PathBuf,
}

/// Issues per ability index, skipping clean abilities.
pub fn lint_issues(scenario: &Scenario) -> Vec<(usize, Vec<ConfigIssue>)> {
    scenario
        .list
        .iter()
        .enumerate()
        .map(|(index, ability)| (index, ability.validate(&scenario.config)))
        .filter(|(_, issues)| !issues.is_empty())
        .collect()
}

impl Lint {
    /// Returns false if any issue was found.
    pub fn execute(self) -> Result<bool> {
        let scenario = Scenario::load(&self.scenario)?;
        let findings = lint_issues(&scenario);

        if findings.is_empty() {
            println!(
                "{} {} abilities, no issues",
                style("OK").bold().green(),
                scenario.list.len()
            );
            return Ok(true);
        }

        for (index, issues) in &findings {
            let name = scenario
                .list
                .get(*index)
                .map(|a| a.name.as_str())
                .unwrap_or_default();
            println!("{} {}", style(format!("{index:>3}.")).bold(), name);
            for issue in issues {
                println!(
                    "     {} {}",
                    style(issue.error_code()).yellow(),
                    issue
                );
            }
        }
        Ok(false)
    }
}
