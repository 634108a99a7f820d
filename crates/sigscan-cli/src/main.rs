//! sigscan: Identify files by magic-byte signature and hash them

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sigscan_cli::commands;

#[derive(Parser)]
#[command(name = "sigscan")]
#[command(author, version, about = "Signature-based file identification tool", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory and write a CSV report of matched files
    Scan {
        /// Directory to analyze
        path: std::path::PathBuf,

        /// Report file path (default: output/output_<timestamp>.csv)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,

        /// Do not descend into subdirectories
        #[arg(long)]
        no_recurse: bool,
    },

    /// List the known file-type signatures
    Signatures,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Scan {
            path,
            output,
            no_recurse,
        } => {
            commands::scan::run(&path, output.as_deref(), !no_recurse)?;
        }
        Commands::Signatures => commands::signatures::run(),
    }

    Ok(())
}
