//! Contract-based validation for the scoring engine.
//!
//! Preconditions are always checked and reject a call before any state is
//! touched. Postconditions compare the state before and after a transition
//! and run in debug builds only.

use crate::action::Shot;
use crate::error::GameError;
use crate::game::Game;
use crate::invariants::{DartsInvariants, InvariantSet, InvariantViolation};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} must hold before applying the action
/// - Postcondition: {Q(before, after)} must hold after applying it
pub trait Contract<S, A: ?Sized> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the shooter is a current player.
pub struct PlayerKnown;

impl PlayerKnown {
    /// Checks that `player` is in the current player list.
    #[instrument(skip(game))]
    pub fn check(player: &str, game: &Game) -> Result<(), GameError> {
        if game.players().iter().any(|p| p == player) {
            Ok(())
        } else {
            warn!(player, "Shot for unknown player");
            Err(GameError::UnknownPlayer(player.to_string()))
        }
    }
}

/// Precondition: nobody has reached the target yet this round.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks that no winner is set.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), GameError> {
        match game.winner() {
            Some(winner) => {
                warn!(winner, "Shot after the target was reached");
                Err(GameError::GameDecided(winner.to_string()))
            }
            None => Ok(()),
        }
    }
}

/// Precondition: a provisional winner exists to redeem against.
pub struct RedemptionOpen;

impl RedemptionOpen {
    /// Checks that a winner is set.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), GameError> {
        if game.winner().is_some() {
            Ok(())
        } else {
            warn!("Redemption batch with no provisional winner");
            Err(GameError::NoPendingRedemption)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Shot Contract
// ─────────────────────────────────────────────────────────────

/// Contract for normal-turn shots.
///
/// Preconditions:
/// - Shooter is a current player
/// - No winner is set
///
/// Postconditions:
/// - All game invariants hold
/// - The target and player list are untouched
pub struct ShotContract;

impl Contract<Game, str> for ShotContract {
    fn pre(game: &Game, player: &str) -> Result<(), GameError> {
        PlayerKnown::check(player, game)?;
        GameUndecided::check(game)?;
        Ok(())
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        check_invariants(after)?;
        if before.target_score() != after.target_score() || before.players() != after.players() {
            return Err(GameError::InvariantViolation(
                "Normal shot changed the target or player list".to_string(),
            ));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Redemption Contract
// ─────────────────────────────────────────────────────────────

/// Contract for redemption batches.
///
/// Preconditions:
/// - A provisional winner exists
///
/// Postconditions:
/// - All game invariants hold
/// - No redemption shot is left owing
/// - The target never decreases and overtime never switches off
pub struct RedemptionContract;

impl Contract<Game, [Shot]> for RedemptionContract {
    fn pre(game: &Game, _shots: &[Shot]) -> Result<(), GameError> {
        RedemptionOpen::check(game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        check_invariants(after)?;
        if !after.redemption_players().is_empty() {
            return Err(GameError::InvariantViolation(
                "Redemption players left after resolution".to_string(),
            ));
        }
        if after.target_score() < before.target_score()
            || (before.in_overtime() && !after.in_overtime())
        {
            return Err(GameError::InvariantViolation(
                "Overtime progression went backwards".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_invariants(game: &Game) -> Result<(), GameError> {
    DartsInvariants::check_all(game).map_err(|violations| {
        GameError::InvariantViolation(format!(
            "Postcondition failed: {}",
            describe(&violations)
        ))
    })
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
