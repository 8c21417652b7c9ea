//! Evaluate every ability in a scenario and report the verdicts.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use console::style;
use farm_core::{CoreError, Verdict, evaluate};
use serde::Serialize;

use crate::scenario::Scenario;

/// Show the verdict for every ability in a scenario
#[derive(Parser)]
pub struct Check {
    /// Scenario file (.toml or .ron)
    #[arg(value_name = "SCENARIO", env = "FARM_SCENARIO")]
    scenario: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One coloured line per ability
    Summary,
    /// JSON array of verdicts
    Json,
}

/// One line of the report.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct VerdictRow {
    pub index: usize,
    pub name: String,
    pub usable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Evaluate each ability independently; contract errors are kept per row.
pub fn verdict_rows(scenario: &Scenario) -> Vec<VerdictRow> {
    let snapshot = scenario.snapshot.as_ref();

    scenario
        .list
        .iter()
        .enumerate()
        .map(|(index, ability)| {
            let mut row = VerdictRow {
                index,
                name: ability.name.clone(),
                usable: false,
                check: None,
                reason: None,
                error: None,
            };
            match evaluate(snapshot, ability) {
                Ok(Verdict::Usable) => row.usable = true,
                Ok(Verdict::Rejected(rejection)) => {
                    row.check = rejection.check().map(|c| c.to_string());
                    row.reason = Some(rejection.to_string());
                }
                Err(err) => {
                    tracing::warn!(index, code = err.error_code(), "{err}");
                    row.error = Some(err.to_string());
                }
            }
            row
        })
        .collect()
}

impl Check {
    pub fn execute(self) -> Result<bool> {
        let scenario = Scenario::load(&self.scenario)?;
        let rows = verdict_rows(&scenario);

        match self.format {
            OutputFormat::Summary => print_summary(&scenario, &rows),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        }

        let failed = rows.iter().filter(|row| row.error.is_some()).count();
        if failed > 0 {
            bail!("{failed} abilities could not be evaluated without a snapshot");
        }
        Ok(true)
    }
}

fn print_summary(scenario: &Scenario, rows: &[VerdictRow]) {
    println!(
        "{} {}",
        style("List:").bold().cyan(),
        scenario.list.name()
    );
    match &scenario.snapshot {
        Some(s) => println!(
            "{} {} ({}) HP {}/{}% MP {}/{}% TP {}",
            style("Snapshot:").bold().cyan(),
            s.name,
            s.status,
            s.hp_current,
            s.hp_percent,
            s.mp_current,
            s.mp_percent,
            s.tp_current
        ),
        None => println!("{} none", style("Snapshot:").bold().cyan()),
    }
    println!();

    for row in rows {
        let label = format!("{:>3}. {}", row.index, row.name);
        if row.usable {
            println!("{} {}", style("READY  ").bold().green(), label);
        } else if let Some(error) = &row.error {
            println!("{} {} - {}", style("ERROR  ").bold().red(), label, error);
        } else {
            println!(
                "{} {} - {}",
                style("SKIPPED").yellow(),
                label,
                row.reason.as_deref().unwrap_or_default()
            );
        }
    }
}
