use clap::Parser;
use miette::Result;
use shopeff::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match cli.command {
        Commands::Report(args) => shopeff::cli::commands::report::run(args, &cli.global),
        Commands::Overruns(args) => shopeff::cli::commands::overruns::run(args, &cli.global),
        Commands::Standings(args) => shopeff::cli::commands::standings::run(args, &cli.global),
        Commands::Check(args) => shopeff::cli::commands::check::run(args, &cli.global),
        Commands::Completions(args) => shopeff::cli::commands::completions::run(args),
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
