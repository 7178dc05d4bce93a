//! Umbral CLI - noise gate for WAV files.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "umbral")]
#[command(author, version, about = "Umbral noise gate CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gate an audio file
    Process(commands::process::ProcessArgs),

    /// Generate test signals
    Generate(commands::generate::GenerateArgs),

    /// Show WAV file metadata
    Info(commands::info::InfoArgs),

    /// Compare two audio files sample by sample
    Compare(commands::compare::CompareArgs),
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Compare(args) => commands::compare::run(args),
    }
}
