//! Rule parameters for a game.

use crate::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Starting target for regulation play.
pub const DEFAULT_TARGET_SCORE: i32 = 301;

/// Amount the target rises each time overtime begins.
pub const DEFAULT_OVERTIME_INCREMENT: i32 = 100;

/// Target and overtime parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct GameRules {
    /// Total a player must hit exactly to lead.
    target_score: i32,
    /// Added to the target whenever a tie forces overtime.
    overtime_increment: i32,
}

impl GameRules {
    /// Creates a validated rule set.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidRules`] if either value is not positive.
    #[instrument]
    pub fn new(target_score: i32, overtime_increment: i32) -> Result<Self, GameError> {
        if target_score <= 0 {
            return Err(GameError::InvalidRules(format!(
                "target score must be positive, got {}",
                target_score
            )));
        }
        if overtime_increment <= 0 {
            return Err(GameError::InvalidRules(format!(
                "overtime increment must be positive, got {}",
                overtime_increment
            )));
        }
        Ok(Self {
            target_score,
            overtime_increment,
        })
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            overtime_increment: DEFAULT_OVERTIME_INCREMENT,
        }
    }
}
