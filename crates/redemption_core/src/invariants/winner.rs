//! Winner invariant: a winner sits exactly on the target.

use super::Invariant;
use crate::Game;

/// Invariant: if a winner is set, they are playing and their total equals the target.
pub struct WinnerAtTarget;

impl Invariant<Game> for WinnerAtTarget {
    fn holds(game: &Game) -> bool {
        match game.winner() {
            Some(winner) => {
                game.players().iter().any(|p| p == winner)
                    && game.score(winner) == Some(game.target_score())
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Winner is playing and sits exactly on the target"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_hit_holds() {
        let mut game = Game::new();
        game.add_player("Alice").expect("Valid name");
        game.record_score("Alice", 301).expect("Valid shot");
        assert!(WinnerAtTarget::holds(&game));
    }

    #[test]
    fn test_winner_below_target_violates() {
        let mut game = Game::new();
        game.add_player("Alice").expect("Valid name");
        game.winner = Some("Alice".to_string());
        assert!(!WinnerAtTarget::holds(&game));
    }
}
