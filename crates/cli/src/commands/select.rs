//! Pick the ability the decision loop would use this tick.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::scenario::Scenario;

/// Print the first usable ability in list order
#[derive(Parser)]
pub struct Select {
    /// Scenario file (.toml or .ron)
    #[arg(value_name = "SCENARIO", env = "FARM_SCENARIO")]
    scenario: PathBuf,
}

impl Select {
    /// Returns false when nothing in the list is usable.
    pub fn execute(self) -> Result<bool> {
        let scenario = Scenario::load(&self.scenario)?;
        let selected = scenario
            .list
            .first_usable(scenario.snapshot.as_ref())
            .context("Scenario has no snapshot but an ability needs one")?;

        match selected {
            Some((index, ability)) => {
                println!(
                    "{} {} (#{})",
                    style("Use:").bold().green(),
                    ability.name,
                    index
                );
                Ok(true)
            }
            None => {
                println!(
                    "{} nothing in {} is usable",
                    style("Idle:").bold().yellow(),
                    scenario.list.name()
                );
                Ok(false)
            }
        }
    }
}
