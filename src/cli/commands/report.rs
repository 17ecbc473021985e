//! `shopeff report` command - Overrun jobs and the most efficient mechanic
//!
//! Prints how many jobs ran over their estimate, the affected vehicles in the
//! order they were encountered, and the mechanic with the best net efficiency.

use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::{escape_csv, escape_md, join_ids, signed_hours};
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};

use super::utils::load_dataset;

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Print only the best mechanic's name (nothing when none qualifies)
    #[arg(long)]
    pub best_only: bool,
}

#[derive(Debug, Serialize)]
struct ReportSummary<'a> {
    overrun_count: usize,
    overrun_vehicle_ids: &'a [i32],
    best_mechanic: Option<&'a str>,
    best_net_efficiency: Option<i64>,
}

pub fn run(args: ReportArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = load_dataset(global)?;
    let report = dataset.report();
    let best = report.best_mechanic();

    if args.best_only {
        if let Some(best) = best {
            println!("{}", best.name);
        }
        return Ok(());
    }

    let summary = ReportSummary {
        overrun_count: report.overrun_count(),
        overrun_vehicle_ids: &report.overrun_vehicle_ids,
        best_mechanic: best.map(|b| b.name.as_str()),
        best_net_efficiency: best.map(|b| b.net_efficiency()),
    };

    let format = effective_format(global.output);
    if print_structured(&summary, format)? {
        return Ok(());
    }

    let ids = join_ids(&report.overrun_vehicle_ids);
    match format {
        OutputFormat::Csv => {
            println!("overrun_count,overrun_vehicle_ids,best_mechanic,best_net_efficiency");
            println!(
                "{},{},{},{}",
                summary.overrun_count,
                escape_csv(&ids),
                escape_csv(summary.best_mechanic.unwrap_or_default()),
                summary
                    .best_net_efficiency
                    .map(|n| n.to_string())
                    .unwrap_or_default()
            );
        }
        OutputFormat::Md => {
            println!("| Metric | Value |");
            println!("|---|---|");
            println!("| Overrun jobs | {} |", summary.overrun_count);
            println!("| Overrun vehicle ids | {} |", ids);
            println!(
                "| Most efficient mechanic | {} |",
                summary.best_mechanic.map(escape_md).unwrap_or_else(|| "-".to_string())
            );
        }
        _ => {
            println!(
                "{} {}",
                style("Overrun jobs:").bold(),
                style(summary.overrun_count).cyan()
            );
            println!("{} {}", style("Overrun vehicle ids:").bold(), ids);
            match best {
                Some(best) => println!(
                    "{} {} ({} net)",
                    style("Most efficient mechanic:").bold(),
                    style(&best.name).green(),
                    signed_hours(best.net_efficiency())
                ),
                None => println!(
                    "{} No mechanic has a matched, assigned repair job",
                    style("!").yellow()
                ),
            }
        }
    }

    Ok(())
}
