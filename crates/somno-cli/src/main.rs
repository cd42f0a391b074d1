mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "somno_core=info,somno=info";

#[derive(Parser)]
#[command(
    name = "somno",
    version,
    about = "Field extraction for sleep-therapy diagnostic and compliance reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract coded fields from report PDFs (or fragment dumps ending in .json)
    Extract {
        /// Paths to PDF files or JSON fragment dumps
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Report template: diagnostic or compliance
        #[arg(short, long)]
        report: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted fields to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Rewrite localized day/hour/minute units to English
        #[arg(long)]
        translate_units: bool,

        /// Number of documents processed in parallel (default: one per CPU)
        #[arg(short, long)]
        jobs: Option<usize>,
    },
    /// List the fields a report template produces
    Schema {
        /// Report template: diagnostic or compliance
        report: String,
    },
    /// List the languages recognized for a report template
    Languages {
        /// Report template: diagnostic or compliance
        report: String,
    },
    /// Check recorded layouts against their expected values
    Verify {
        /// Paths to JSON fixture files
        #[arg(required = true)]
        fixtures: Vec<PathBuf>,

        /// Rewrite localized day/hour/minute units to English
        #[arg(long)]
        translate_units: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SOMNO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_files,
            report,
            output,
            out,
            translate_units,
            jobs,
        } => commands::extract::run(input_files, &report, &output, out, translate_units, jobs),
        Commands::Schema { report } => commands::schema::run(&report),
        Commands::Languages { report } => commands::languages::run(&report),
        Commands::Verify {
            fixtures,
            translate_units,
        } => commands::verify::run(fixtures, translate_units),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
