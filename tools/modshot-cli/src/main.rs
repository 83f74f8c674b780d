//! modshot CLI: watermark mod screenshots with their logos.
//!
//! Usage:
//!   modshot [run]      Process every screenshot in ./inputs
//!   modshot init       Create ./logos, ./inputs and ./outputs
//!   modshot check      Report font, directories and options file status
//!
//! Paths are fixed by convention relative to the working directory.

use clap::{Parser, Subcommand};

use modshot_common::config::{AppConfig, LoggingConfig};

mod commands;

#[derive(Parser)]
#[command(
    name = "modshot",
    about = "Stamp mod screenshots with a glowing logo panel",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit structured JSON logs
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every screenshot (default)
    Run,

    /// Create the directory layout and exit
    Init,

    /// Check that everything a run needs is in place
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::default();
    config.logging = LoggingConfig {
        level: if cli.verbose { "debug" } else { "info" }.to_string(),
        json: cli.json_logs,
        verbose: cli.verbose,
    };
    modshot_common::logging::init_logging(&config.logging);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run::run(config).await,
        Commands::Init => commands::init::run(&config),
        Commands::Check => commands::check::run(&config),
    }
}
