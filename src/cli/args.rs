//! Command-line arguments shared by every command

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::check::CheckArgs;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::overruns::OverrunsArgs;
use crate::cli::commands::report::ReportArgs;
use crate::cli::commands::standings::StandingsArgs;
use crate::core::config::{Config, ConfigError, SourceOverrides, Sources};

#[derive(Parser, Debug)]
#[command(
    name = "shopeff",
    version,
    about = "Cross-reference repair jobs, repair types and mechanics to report overruns and mechanic efficiency"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Directory holding the input files and an optional shopeff.yaml
    #[arg(long, short = 'd', global = true, env = "SHOPEFF_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Repair jobs file (overrides config)
    #[arg(long, global = true, env = "SHOPEFF_JOBS")]
    pub jobs: Option<PathBuf>,

    /// Repair types file (overrides config)
    #[arg(long, global = true, env = "SHOPEFF_TYPES")]
    pub types: Option<PathBuf>,

    /// Mechanics file (overrides config)
    #[arg(long, global = true, env = "SHOPEFF_MECHANICS")]
    pub mechanics: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalOpts {
    pub fn overrides(&self) -> SourceOverrides {
        SourceOverrides {
            jobs: self.jobs.clone(),
            types: self.types.clone(),
            mechanics: self.mechanics.clone(),
        }
    }

    /// Resolve the three source locations from flags, config file and defaults
    pub fn sources(&self) -> Result<Sources, ConfigError> {
        let config = Config::load(&self.data_dir)?;
        Ok(config.resolve(&self.data_dir, &self.overrides()))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count overrun jobs and name the most efficient mechanic
    Report(ReportArgs),

    /// List every job that ran over its estimate
    Overruns(OverrunsArgs),

    /// Rank mechanics by net efficiency
    Standings(StandingsArgs),

    /// Load the input files and summarize what would be aggregated
    Check(CheckArgs),

    /// Generate a shell completion script
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table for terminals
    #[default]
    Auto,
    Table,
    Json,
    Yaml,
    Csv,
    /// Markdown table
    Md,
}
