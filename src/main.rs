// ===== shotscope/src/main.rs =====
use clap::{Parser, Subcommand};
use std::path::Path;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Launch-monitor session export to analyze.
    #[arg(global = true, long, default_value = "golfuture_session.csv")]
    csv: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Report(cmd::report::ReportArgs),
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // 1. Locate the session file
    if !Path::new(&cli.csv).exists() {
        error!("Unable to find the file {}", cli.csv);
        process::exit(1);
    }

    // 2. Ingest
    let shots = match shotscope::ingest::load_shots(&cli.csv) {
        Ok(shots) => shots,
        Err(e) => {
            error!("❌ Failed to read {}: {}", cli.csv, e);
            process::exit(1);
        }
    };
    info!("📂 Loaded {} shots from {}", shots.len(), cli.csv);

    // 3. Execute
    match cli.command {
        Commands::Report(args) => cmd::report::run(args, &shots),
        Commands::Validate(args) => cmd::validate::run(args, &shots),
    }
}
