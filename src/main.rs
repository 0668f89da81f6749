//! Pantry Portal - Terminal client for food-bank pickup requests
//!
//! Runs the interactive request wizard by default, or headless staff
//! subcommands for inventory and request management.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use pantry_portal::api::ApiClient;
use pantry_portal::cli::{InventoryArgs, RequestsArgs};
use pantry_portal::config::Config;
use pantry_portal::tui;

/// Pantry Portal - Terminal client for food-bank pickup requests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Staff subcommand; omit to start the request wizard
    #[command(subcommand)]
    command: Option<Command>,
}

/// Headless staff commands
#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect available inventory
    Inventory(InventoryArgs),
    /// Inspect and update submitted requests
    Requests(RequestsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e}");
        eprintln!("Continuing with default settings.");
        Config::default()
    });
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate()?;
    }

    let client = ApiClient::new(&config.api.base_url)?;

    match cli.command {
        Some(Command::Inventory(args)) => {
            init_stderr_logging();
            args.execute(&client)
        }
        Some(Command::Requests(args)) => {
            init_stderr_logging();
            args.execute(&client)
        }
        None => run_portal(config, client),
    }
}

/// Run the interactive request wizard.
fn run_portal(config: Config, client: ApiClient) -> Result<()> {
    init_file_logging();

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config, client);

    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore the terminal before reporting any loop error
    tui::restore_terminal(terminal)?;
    result
}

/// Plain stderr logging for headless subcommands.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

/// File logging for the TUI; stdout belongs to the terminal UI while raw
/// mode is active. Skipped silently when the log file cannot be opened.
fn init_file_logging() {
    let Ok(path) = Config::log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
