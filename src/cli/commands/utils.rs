//! Shared utilities for CLI commands

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::engine::EfficiencyReport;
use crate::core::loader::Dataset;

/// Resolve the sources from the global options and load all three
pub fn load_dataset(global: &GlobalOpts) -> Result<Dataset> {
    let sources = global.sources()?;
    let dataset = Dataset::load(&sources)?;
    Ok(dataset)
}

/// Format a mechanic id with its name for display
/// Returns format like "Ana (#1)" or "#1" if the mechanic has no standing
pub fn format_mechanic(report: &EfficiencyReport, mechanic_id: i32) -> String {
    report
        .standings
        .iter()
        .find(|totals| totals.mechanic_id == mechanic_id)
        .map(|totals| format!("{} (#{})", totals.name, mechanic_id))
        .unwrap_or_else(|| format!("#{}", mechanic_id))
}
