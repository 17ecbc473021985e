//! `shopeff standings` command - Mechanics ranked by net efficiency
//!
//! Net efficiency is hours saved minus hours overrun across a mechanic's
//! matched, assigned jobs. Ties keep the order in which mechanics first
//! appear in the repair jobs.

use console::style;
use miette::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::{escape_csv, escape_md, signed_hours};
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::engine::MechanicTotals;

use super::utils::load_dataset;

#[derive(clap::Args, Debug)]
pub struct StandingsArgs {
    /// Limit number of mechanics shown
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct Standing<'a> {
    rank: usize,
    #[serde(flatten)]
    totals: &'a MechanicTotals,
    net_efficiency: i64,
}

#[derive(Tabled)]
struct StandingRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "MECHANIC")]
    name: String,
    #[tabled(rename = "JOBS")]
    jobs: usize,
    #[tabled(rename = "SAVED")]
    efficient: i64,
    #[tabled(rename = "OVERRUN")]
    overrun: i64,
    #[tabled(rename = "NET")]
    net: String,
}

pub fn run(args: StandingsArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = load_dataset(global)?;
    let report = dataset.report();

    let limit = args.limit.unwrap_or(usize::MAX);
    let standings: Vec<Standing> = report
        .ranked()
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, totals)| Standing {
            rank: i + 1,
            totals,
            net_efficiency: totals.net_efficiency(),
        })
        .collect();

    let format = effective_format(global.output);
    if print_structured(&standings, format)? {
        return Ok(());
    }

    match format {
        OutputFormat::Csv => {
            println!("rank,mechanic_id,name,jobs,efficient_hours,overrun_hours,net_efficiency");
            for s in &standings {
                println!(
                    "{},{},{},{},{},{},{}",
                    s.rank,
                    s.totals.mechanic_id,
                    escape_csv(&s.totals.name),
                    s.totals.jobs,
                    s.totals.efficient_hours,
                    s.totals.overrun_hours,
                    s.net_efficiency
                );
            }
        }
        OutputFormat::Md => {
            println!("| # | ID | Mechanic | Jobs | Saved | Overrun | Net |");
            println!("|---|---|---|---|---|---|---|");
            for s in &standings {
                println!(
                    "| {} | {} | {} | {} | {} | {} | {} |",
                    s.rank,
                    s.totals.mechanic_id,
                    escape_md(&s.totals.name),
                    s.totals.jobs,
                    s.totals.efficient_hours,
                    s.totals.overrun_hours,
                    s.net_efficiency
                );
            }
        }
        _ => {
            if standings.is_empty() {
                println!("No mechanic has a matched, assigned repair job.");
                return Ok(());
            }

            let rows: Vec<StandingRow> = standings
                .iter()
                .map(|s| StandingRow {
                    rank: s.rank,
                    id: s.totals.mechanic_id,
                    name: s.totals.name.clone(),
                    jobs: s.totals.jobs,
                    efficient: s.totals.efficient_hours,
                    overrun: s.totals.overrun_hours,
                    net: signed_hours(s.net_efficiency),
                })
                .collect();

            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{}", table);

            if report.skipped.total() > 0 {
                println!();
                println!(
                    "{} {} job(s) not counted; run {} for details.",
                    style("note:").dim(),
                    report.skipped.total(),
                    style("shopeff check").cyan()
                );
            }
        }
    }

    Ok(())
}
