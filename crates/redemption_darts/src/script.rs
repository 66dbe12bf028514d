//! Replay of a recorded game.
//!
//! A script lists the players in turn order and every throw in the order it
//! was taken; the controller decides whose throw each one is.

use crate::controller::{TurnController, TurnReport};
use derive_getters::Getters;
use derive_more::{Display, Error};
use redemption_core::GameRules;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// A recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Script {
    /// Players in turn order.
    players: Vec<String>,
    /// Throws in the order they were taken.
    shots: Vec<i32>,
}

/// Result of replaying a script.
#[derive(Debug, Clone, Getters)]
pub struct Replay {
    /// Controller holding the final state.
    controller: TurnController,
    /// One report per applied throw.
    reports: Vec<TurnReport>,
}

impl Script {
    /// Creates a script.
    pub fn new(players: Vec<String>, shots: Vec<i32>) -> Self {
        Self { players, shots }
    }

    /// Loads a script from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script: {}", e)))?;
        let script: Self = serde_json::from_str(&content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        debug!(players = script.players.len(), shots = script.shots.len(), "Script loaded");
        Ok(script)
    }

    /// Plays every throw through a fresh controller.
    ///
    /// Throws left over once the game is decided are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError`] if a player cannot be added or a throw is rejected.
    #[instrument(skip(self), fields(players = self.players.len(), shots = self.shots.len()))]
    pub fn play(&self, rules: GameRules) -> Result<Replay, ScriptError> {
        let mut controller = TurnController::new(rules);
        for name in &self.players {
            controller
                .add_player(name)
                .map_err(|e| ScriptError::new(format!("Cannot add player '{}': {}", name, e)))?;
        }

        let mut reports = Vec::with_capacity(self.shots.len());
        for (index, &points) in self.shots.iter().enumerate() {
            if controller.is_over() {
                warn!(remaining = self.shots.len() - index, "Ignoring throws after the game ended");
                break;
            }
            let report = controller
                .submit(points)
                .map_err(|e| ScriptError::new(format!("Throw {} rejected: {}", index + 1, e)))?;
            reports.push(report);
        }

        info!(
            winner = ?controller.game().winner(),
            target = controller.game().target_score(),
            "Replay finished"
        );
        Ok(Replay {
            controller,
            reports,
        })
    }
}

/// Script loading or replay error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
