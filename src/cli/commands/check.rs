//! `shopeff check` command - Load the inputs and report what would be counted
//!
//! Each source is loaded on its own so every broken file is reported in one
//! run. Jobs left out of the aggregation (unassigned, or referencing an
//! unknown repair type or mechanic) are counted, not treated as errors,
//! unless `--strict` is given.

use console::style;
use miette::Result;
use serde::Serialize;
use std::path::Path;

use crate::cli::output::{effective_format, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::engine::{compute_report, SkipCounts};
use crate::core::entity::Record;
use crate::core::loader::{load_file, LoadError};
use crate::entities::{Mechanic, RepairJob, RepairType};

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Strict mode - jobs referencing unknown repair types or mechanics fail the check
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct CheckSummary {
    repair_jobs: usize,
    repair_types: usize,
    mechanics: usize,
    counted_jobs: usize,
    skipped: SkipCounts,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let sources = global.sources()?;
    let format = effective_format(global.output);
    let show_status = !matches!(format, OutputFormat::Json | OutputFormat::Yaml);

    let jobs = load_file::<RepairJob>(&sources.jobs);
    let types = load_file::<RepairType>(&sources.types);
    let mechanics = load_file::<Mechanic>(&sources.mechanics);

    if show_status {
        print_status(&sources.jobs, &jobs);
        print_status(&sources.types, &types);
        print_status(&sources.mechanics, &mechanics);
    }

    let (jobs, types, mechanics) = match (jobs, types, mechanics) {
        (Ok(jobs), Ok(types), Ok(mechanics)) => (jobs, types, mechanics),
        (jobs, types, mechanics) => {
            let mut failures: Vec<LoadError> = [jobs.err(), types.err(), mechanics.err()]
                .into_iter()
                .flatten()
                .collect();
            if failures.len() == 1 {
                return Err(failures.remove(0).into());
            }
            let details: Vec<String> = failures.iter().map(|e| format!("  - {}", e)).collect();
            return Err(miette::miette!(
                "{} of 3 sources failed to load:\n{}",
                failures.len(),
                details.join("\n")
            ));
        }
    };

    let report = compute_report(&jobs, &types, &mechanics);
    let summary = CheckSummary {
        repair_jobs: jobs.len(),
        repair_types: types.len(),
        mechanics: mechanics.len(),
        counted_jobs: jobs.len() - report.skipped.total(),
        skipped: report.skipped,
    };

    if !print_structured(&summary, format)? {
        println!();
        println!(
            "{} of {} repair job(s) counted",
            style(summary.counted_jobs).cyan(),
            summary.repair_jobs
        );
        print_skip("unassigned", summary.skipped.unassigned);
        print_skip("unknown repair type", summary.skipped.unknown_repair_type);
        print_skip("unknown mechanic", summary.skipped.unknown_mechanic);
    }

    let dangling = summary.skipped.unknown_repair_type + summary.skipped.unknown_mechanic;
    if args.strict && dangling > 0 {
        return Err(miette::miette!(
            "{} repair job(s) reference an unknown repair type or mechanic",
            dangling
        ));
    }

    Ok(())
}

fn print_status<T: Record>(path: &Path, result: &Result<Vec<T>, LoadError>) {
    match result {
        Ok(records) => println!(
            "{} {:<12} {} row(s)  {}",
            style("✓").green(),
            T::KIND,
            records.len(),
            style(path.display()).dim()
        ),
        Err(e) => println!("{} {:<12} {}", style("✗").red(), T::KIND, e),
    }
}

fn print_skip(reason: &str, count: usize) {
    if count > 0 {
        println!("  {} {} skipped: {}", style("-").dim(), reason, count);
    }
}
