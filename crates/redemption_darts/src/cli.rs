//! Command-line interface for redemption_darts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Redemption Darts - exact-target scoring with redemption rounds and overtime
#[derive(Parser, Debug)]
#[command(name = "redemption_darts")]
#[command(about = "Score an exact-target darts game from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one throw per line
    Play {
        /// Player name, in turn order (repeat for each player)
        #[arg(short, long = "player", required = true)]
        players: Vec<String>,

        /// TOML file overriding target_score / overtime_increment
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Replay a recorded game from a JSON script
    Replay {
        /// Script file with "players" and "shots"
        script: PathBuf,

        /// TOML file overriding target_score / overtime_increment
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Print the final game state as JSON instead of status lines
        #[arg(long)]
        json: bool,
    },
}
