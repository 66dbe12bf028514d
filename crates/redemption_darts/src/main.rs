//! Redemption Darts - unified CLI
//!
//! Interactive scoring and scripted replay on top of the scoring engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use redemption_darts::{run_console, RulesConfig, Script, TurnController};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { players, rules } => run_play(players, rules),
        Command::Replay {
            script,
            rules,
            json,
        } => run_replay(script, rules, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(players = players.len()))]
fn run_play(players: Vec<String>, rules: Option<PathBuf>) -> Result<()> {
    let config = RulesConfig::load_or_default(rules.as_deref())?;
    let mut controller = TurnController::new(config.rules()?);

    for name in &players {
        controller
            .add_player(name)
            .with_context(|| format!("Cannot add player '{}'", name))?;
    }

    info!("Starting interactive game");
    let stdin = std::io::stdin();
    run_console(&mut controller, stdin.lock(), std::io::stdout())
}

/// Replay a recorded game
#[instrument(skip_all, fields(script = %script.display()))]
fn run_replay(script: PathBuf, rules: Option<PathBuf>, json: bool) -> Result<()> {
    let config = RulesConfig::load_or_default(rules.as_deref())?;
    let replay = load_script(&script)?.play(config.rules()?)?;

    if json {
        let snapshot = serde_json::to_string_pretty(replay.controller().game())
            .context("Failed to serialize game state")?;
        println!("{}", snapshot);
        return Ok(());
    }

    for report in replay.reports() {
        println!("{}", report.status());
    }
    for (player, total) in replay.controller().scoreboard() {
        println!("  {}: {}", player, total);
    }
    match replay.controller().game().winner() {
        Some(winner) if replay.controller().is_over() => println!("Winner: {}", winner),
        _ => println!("Game not decided; current: {:?}", replay.controller().current_player()),
    }
    Ok(())
}

fn load_script(path: &Path) -> Result<Script> {
    Script::from_file(path).with_context(|| format!("Failed to load {}", path.display()))
}
