//! facet CLI
//!
//! Command-line interface for the facet collection-view engine: point it at
//! a JSON array of records and derive filtered, searched, sorted, paginated
//! views or grouped counts.

use clap::{Parser, Subcommand};
use facet_core::logging_facility::{init, Profile};

mod commands;
mod registry_builder;

#[derive(Debug, Parser)]
#[command(name = "facet")]
#[command(about = "facet - Deterministic collection views over JSON records", long_about = None)]
struct Cli {
    /// Emit structured logs while executing
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute a derived view (filter, search, sort, paginate)
    View(commands::view::ViewArgs),
    /// Compute grouped counts over the matched records
    Counts(commands::counts::CountsArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::View(args) => commands::view::execute(args),
        Commands::Counts(args) => commands::counts::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
