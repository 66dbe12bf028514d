//! Engine error type.

/// Error returned when a call is rejected by the engine.
///
/// A rejected call never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A player name was empty or whitespace.
    #[display("Player name must not be empty")]
    EmptyPlayerName,

    /// The named player is not in the current game.
    #[display("Unknown player '{}'", _0)]
    UnknownPlayer(String),

    /// A winner is already set, so normal shots are no longer accepted.
    #[display("Game already decided: {} reached the target", _0)]
    GameDecided(String),

    /// No provisional winner exists to redeem against.
    #[display("No redemption round is pending")]
    NoPendingRedemption,

    /// Target score or overtime increment is not positive.
    #[display("Invalid rules: {}", _0)]
    InvalidRules(String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
