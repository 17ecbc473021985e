//! `shopeff overruns` command - Jobs that took longer than estimated

use console::style;
use miette::Result;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::escape_csv;
use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::engine::OverrunJob;

use super::utils::{format_mechanic, load_dataset};

#[derive(clap::Args, Debug)]
pub struct OverrunsArgs {
    /// Only show jobs done by this mechanic id
    #[arg(long, short = 'm')]
    pub mechanic_id: Option<i32>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

#[derive(Tabled)]
struct OverrunRow {
    #[tabled(rename = "VEHICLE")]
    vehicle: i32,
    #[tabled(rename = "TYPE")]
    repair_type: i32,
    #[tabled(rename = "MECHANIC")]
    mechanic: String,
    #[tabled(rename = "ESTIMATED")]
    estimated: i32,
    #[tabled(rename = "ACTUAL")]
    actual: i32,
    #[tabled(rename = "OVER")]
    over: i64,
}

pub fn run(args: OverrunsArgs, global: &GlobalOpts) -> Result<()> {
    let dataset = load_dataset(global)?;
    let report = dataset.report();

    let overruns: Vec<&OverrunJob> = report
        .overruns
        .iter()
        .filter(|job| args.mechanic_id.map_or(true, |id| job.mechanic_id == id))
        .collect();

    if args.count {
        println!("{}", overruns.len());
        return Ok(());
    }

    let format = effective_format(global.output);
    if print_structured(&overruns, format)? {
        return Ok(());
    }

    match format {
        OutputFormat::Csv => {
            println!("vehicle_id,repair_type_id,mechanic_id,mechanic,estimated_time,actual_time,hours_over");
            for job in &overruns {
                println!(
                    "{},{},{},{},{},{},{}",
                    job.vehicle_id,
                    job.repair_type_id,
                    job.mechanic_id,
                    escape_csv(&format_mechanic(&report, job.mechanic_id)),
                    job.estimated_time,
                    job.actual_time,
                    job.hours_over
                );
            }
        }
        OutputFormat::Md => {
            println!("| Vehicle | Type | Mechanic | Estimated | Actual | Over |");
            println!("|---|---|---|---|---|---|");
            for job in &overruns {
                println!(
                    "| {} | {} | {} | {} | {} | {} |",
                    job.vehicle_id,
                    job.repair_type_id,
                    format_mechanic(&report, job.mechanic_id),
                    job.estimated_time,
                    job.actual_time,
                    job.hours_over
                );
            }
        }
        _ => {
            if overruns.is_empty() {
                println!("No repair job ran over its estimate.");
                return Ok(());
            }

            let rows: Vec<OverrunRow> = overruns
                .iter()
                .map(|job| OverrunRow {
                    vehicle: job.vehicle_id,
                    repair_type: job.repair_type_id,
                    mechanic: format_mechanic(&report, job.mechanic_id),
                    estimated: job.estimated_time,
                    actual: job.actual_time,
                    over: job.hours_over,
                })
                .collect();

            println!(
                "{} job(s) ran over their estimate:",
                style(overruns.len()).cyan()
            );
            println!();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }

    Ok(())
}
