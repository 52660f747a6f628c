mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use lotto_checker::{CaptureOutcome, CheckError};
use lotto_core::LottoError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Check lotto tickets against the latest winning draws")]
#[command(version)]
struct Cli {
    /// Data directory for scan history
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON file with games and winning draws
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List games and their latest winning draws
    Games,

    /// Show the prize breakdown
    Prizes,

    /// Scan a ticket and check it against the winning draw
    Scan(commands::ScanArgs),

    /// Scan history commands
    #[command(subcommand)]
    History(commands::HistoryCommands),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = CliConfig::new(cli.data_dir, cli.catalog, cli.verbose);

    // Initialize logging
    let log_level = if config.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto_cli={},lotto_core={},lotto_checker={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Using data directory {}", config.data_dir.display());
    let catalog = config.load_catalog().await?;

    let result = match cli.command {
        Commands::Games => commands::show_games(&catalog),
        Commands::Prizes => commands::show_prizes(),
        Commands::Scan(args) => {
            let history = config.open_history().await?;
            commands::handle_scan(args, &catalog, &history).await
        }
        Commands::History(cmd) => {
            let history = config.open_history().await?;
            commands::handle_history_command(cmd, &catalog, &history).await
        }
    };

    if let Err(e) = result {
        match e.downcast_ref::<CheckError>() {
            Some(CheckError::CaptureAborted(CaptureOutcome::PermissionDenied)) => {
                eprintln!("Error: Camera permission is required to scan tickets");
            }
            Some(CheckError::CaptureAborted(_)) => {
                eprintln!("Scan canceled, nothing was recorded");
            }
            Some(CheckError::Core(LottoError::UnknownGame { id })) => {
                eprintln!("Error: Game '{}' not found", id);
                eprintln!("Use 'lotto games' to see available games");
            }
            Some(CheckError::Core(LottoError::NoWinningDraw { game_id })) => {
                eprintln!("Error: No winning draw published for game '{}'", game_id);
                eprintln!("The ticket could not be checked");
            }
            Some(CheckError::InvalidTicket(reason)) => {
                eprintln!("Error: Invalid ticket: {}", reason);
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
