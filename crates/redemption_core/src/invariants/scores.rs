//! Scores-within-target invariant: busts never persist.

use super::Invariant;
use crate::Game;

/// Invariant: no recorded total exceeds the current target.
///
/// Totals of players who dropped out in an earlier round are included;
/// the target only rises, so they stay below it too.
pub struct ScoresWithinTarget;

impl Invariant<Game> for ScoresWithinTarget {
    fn holds(game: &Game) -> bool {
        game.scores().values().all(|&total| total <= game.target_score())
    }

    fn description() -> &'static str {
        "No total exceeds the target"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bust_holds() {
        let mut game = Game::new();
        game.add_player("Alice").expect("Valid name");
        game.record_score("Alice", 290).expect("Valid shot");
        game.record_score("Alice", 20).expect("Valid shot");
        assert!(ScoresWithinTarget::holds(&game));
    }

    #[test]
    fn test_overshoot_violates() {
        let mut game = Game::new();
        game.add_player("Alice").expect("Valid name");
        game.scores.insert("Alice".to_string(), 302);
        assert!(!ScoresWithinTarget::holds(&game));
    }
}
