//! Unique players invariant: names appear once and each has a total.

use super::Invariant;
use crate::Game;
use std::collections::HashSet;

/// Invariant: the player list has no duplicates and every player has a score.
pub struct UniquePlayers;

impl Invariant<Game> for UniquePlayers {
    fn holds(game: &Game) -> bool {
        let mut seen = HashSet::new();
        game.players()
            .iter()
            .all(|p| seen.insert(p.as_str()) && game.score(p).is_some())
    }

    fn description() -> &'static str {
        "Players are unique and each has a score"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_add_holds() {
        let mut game = Game::new();
        game.add_player("Alice").expect("Valid name");
        game.add_player("Alice").expect("Valid name");
        assert!(UniquePlayers::holds(&game));
    }

    #[test]
    fn test_duplicated_entry_violates() {
        let mut game = Game::new();
        game.add_player("Alice").expect("Valid name");
        game.players.push("Alice".to_string());
        assert!(!UniquePlayers::holds(&game));
    }

    #[test]
    fn test_missing_score_violates() {
        let mut game = Game::new();
        game.players.push("Ghost".to_string());
        assert!(!UniquePlayers::holds(&game));
    }
}
