//! Line-oriented console play.
//!
//! Reads one throw per line and prints the scoreboard and status after each
//! one. Generic over reader and writer so whole games can be scripted in tests.

use crate::controller::TurnController;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Parses a typed throw. Anything that is not an integer counts as zero.
pub fn parse_points(input: &str) -> i32 {
    input.trim().parse().unwrap_or(0)
}

/// Runs an interactive game until it is decided, `quit` is typed, or input ends.
#[instrument(skip_all)]
pub fn run_console<R: BufRead, W: Write>(
    controller: &mut TurnController,
    input: R,
    mut output: W,
) -> Result<()> {
    info!(players = controller.game().players().len(), "Starting console game");
    print_board(controller, &mut output)?;
    prompt(controller, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
            debug!("Quit requested");
            writeln!(output, "Bye.")?;
            return Ok(());
        }

        match controller.submit(parse_points(trimmed)) {
            Ok(report) => writeln!(output, "{}", report.status())?,
            Err(err) => {
                warn!(error = %err, "Throw rejected");
                writeln!(output, "error: {}", err)?;
            }
        }

        print_board(controller, &mut output)?;
        if controller.is_over() {
            info!(winner = ?controller.game().winner(), "Console game finished");
            return Ok(());
        }
        prompt(controller, &mut output)?;
    }

    debug!("Input ended before the game was decided");
    Ok(())
}

fn print_board<W: Write>(controller: &TurnController, output: &mut W) -> Result<()> {
    let game = controller.game();
    let phase = if game.in_overtime() { " (overtime)" } else { "" };
    writeln!(output, "Target: {}{}", game.target_score(), phase)?;

    let width = game.players().iter().map(|p| p.len()).max().unwrap_or(0);
    for (player, total) in controller.scoreboard() {
        writeln!(output, "  {:<width$}  {:>4}", player, total, width = width)?;
    }
    Ok(())
}

fn prompt<W: Write>(controller: &TurnController, output: &mut W) -> Result<()> {
    if let Some(player) = controller.current_player() {
        let mode = if controller.redemption_in_progress() {
            " (redemption)"
        } else {
            ""
        };
        write!(output, "{} to throw{} > ", player, mode)?;
        output.flush()?;
    }
    Ok(())
}
