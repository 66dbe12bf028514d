//! Redemption invariant: only the leader's opponents owe a shot.

use super::Invariant;
use crate::Game;

/// Invariant: redemption players are current players other than the
/// provisional winner, and exist only while a winner is set.
pub struct RedemptionExcludesWinner;

impl Invariant<Game> for RedemptionExcludesWinner {
    fn holds(game: &Game) -> bool {
        let redeeming = game.redemption_players();
        if redeeming.is_empty() {
            return true;
        }
        let Some(winner) = game.winner() else {
            return false;
        };
        redeeming
            .iter()
            .all(|p| p != winner && game.players().contains(p))
    }

    fn description() -> &'static str {
        "Redemption players exclude the winner and only exist while one is set"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_round_holds() {
        let mut game = Game::new();
        game.add_player("Alice").expect("Valid name");
        game.add_player("Bob").expect("Valid name");
        game.record_score("Bob", 301).expect("Valid shot");
        assert!(RedemptionExcludesWinner::holds(&game));
    }

    #[test]
    fn test_redemption_without_winner_violates() {
        let mut game = Game::new();
        game.add_player("Alice").expect("Valid name");
        game.redemption_players.push("Alice".to_string());
        assert!(!RedemptionExcludesWinner::holds(&game));
    }

    #[test]
    fn test_winner_owing_redemption_violates() {
        let mut game = Game::new();
        game.add_player("Alice").expect("Valid name");
        game.record_score("Alice", 301).expect("Valid shot");
        game.redemption_players.push("Alice".to_string());
        assert!(!RedemptionExcludesWinner::holds(&game));
    }
}
