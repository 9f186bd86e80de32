//! Command-line interface for strictly_state.

use clap::{Parser, Subcommand};

/// Strictly State - persisted component state from the command line
#[derive(Parser, Debug)]
#[command(name = "strictly_state")]
#[command(
    about = "Persisted greeting, replayable tic-tac-toe, and remote lookups",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(long, global = true, default_value = "strictly_state.toml")]
    pub config: std::path::PathBuf,

    /// Database path, overriding the config file
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the greeting, optionally changing the stored name
    Greet {
        /// New name to store
        #[arg(long)]
        name: Option<String>,
    },

    /// Play the saved tic-tac-toe game
    Game {
        /// Game action
        #[command(subcommand)]
        action: GameAction,
    },

    /// Move a stored slot to a new key
    Rekey {
        /// Current key
        from: String,

        /// New key
        to: String,
    },

    /// Look up a subject remotely
    Fetch {
        /// Subject to look up
        subject: String,

        /// Base URL, overriding the config file
        #[arg(long)]
        base_url: Option<String>,
    },
}

/// Tic-tac-toe actions
#[derive(Subcommand, Debug)]
pub enum GameAction {
    /// Print the board, status, and move list
    Show,

    /// Place the next mark (index 0-8 or a label like "center")
    Play {
        /// Square to mark
        square: String,
    },

    /// Display an earlier snapshot
    Jump {
        /// Step to display (0 is the game start)
        step: usize,
    },

    /// Start a new game
    Restart,
}
