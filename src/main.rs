//! Strictly State - Unified CLI
//!
//! Drives the persisted components against a SQLite store.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, GameAction};
use strictly_state::{
    AppConfig, FetchStatus, Game, Greeting, HttpFetcher, Position, RemoteResource, SavedGame,
    SqliteStore, move_slot,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(db_path) = cli.db_path {
        config = config.with_db_path(db_path);
    }
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Greet { name } => run_greet(&config, name),
        Command::Game { action } => run_game(&config, action),
        Command::Rekey { from, to } => run_rekey(&config, from, to),
        Command::Fetch { subject, base_url } => run_fetch(config, subject, base_url).await,
    }
}

/// Opens the configured store.
fn open_store(config: &AppConfig) -> Result<SqliteStore> {
    SqliteStore::open(config.db_path().clone())
        .with_context(|| format!("Failed to open store at '{}'", config.db_path()))
}

/// Show the greeting, storing a new name first if one was given
#[instrument(skip(config))]
fn run_greet(config: &AppConfig, name: Option<String>) -> Result<()> {
    let mut greeting = Greeting::open(open_store(config)?, "")?;

    if let Some(name) = name {
        greeting.set_name(&name)?;
        info!("Name stored");
    }

    println!("{}", greeting.message());
    Ok(())
}

/// Apply one game action and print the result
#[instrument(skip(config))]
fn run_game(config: &AppConfig, action: GameAction) -> Result<()> {
    let mut saved = SavedGame::open(open_store(config)?)?;

    match action {
        GameAction::Show => {}
        GameAction::Play { square } => {
            let Some(pos) = Position::from_label_or_number(&square) else {
                bail!("Unknown square '{}' (use 0-8 or a label like 'center')", square);
            };
            if !saved.select_square(pos)? {
                println!("Move ignored: {} is taken or the game is over", pos);
            }
        }
        GameAction::Jump { step } => {
            if !saved.jump_to(step)? {
                bail!(
                    "No step {} (history has {} snapshots)",
                    step,
                    saved.game().history().len()
                );
            }
        }
        GameAction::Restart => saved.restart()?,
    }

    print_game(saved.game());
    Ok(())
}

/// Print board, status line, and move picker
fn print_game(game: &Game) {
    println!("{}", game.current().display());
    println!();
    println!("{}", game.status());
    println!();
    for entry in game.moves() {
        println!("{:>2}. {}", entry.step, entry);
    }
}

/// Move a stored slot to a new key
#[instrument(skip(config))]
fn run_rekey(config: &AppConfig, from: String, to: String) -> Result<()> {
    let store = open_store(config)?;

    if !move_slot(&store, &from, &to)? {
        bail!("No slot stored under '{}'", from);
    }

    println!("Moved '{}' to '{}'", from, to);
    Ok(())
}

/// Fetch a subject and print the panel
#[instrument(skip(config))]
async fn run_fetch(config: AppConfig, subject: String, base_url: Option<String>) -> Result<()> {
    let config = match base_url {
        Some(url) => config.with_fetch_base_url(url),
        None => config,
    };

    let mut resource = RemoteResource::new(HttpFetcher::new(config.fetch_base_url().clone()));

    match resource.load(&subject).await {
        FetchStatus::Resolved(data) => println!("{}", serde_json::to_string_pretty(data)?),
        FetchStatus::Rejected(error) => bail!("There was an error: {}", error.message),
        other => println!("{}", other.message()),
    }

    Ok(())
}
