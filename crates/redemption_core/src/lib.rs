//! Redemption Darts scoring engine.
//!
//! A pure, synchronous state machine for an exact-target darts game:
//! players race to hit the target total exactly, overshooting busts the
//! shot, and the first player to land on the target opens a redemption
//! round in which every other player gets one shot to tie. Any tie sends
//! the tying players and the leader into overtime with a raised target.
//!
//! # Architecture
//!
//! - **Game**: the aggregate root, owning all score mutation
//! - **Rules**: pure shot resolution plus the configurable target/increment
//! - **Contracts**: preconditions and postconditions around each transition
//! - **Invariants**: properties checked after every transition in debug builds
//!
//! # Example
//!
//! ```
//! use redemption_core::{Game, RedemptionOutcome, Shot, ShotOutcome};
//!
//! # fn main() -> Result<(), redemption_core::GameError> {
//! let mut game = Game::new();
//! game.add_player("Alice")?;
//! game.add_player("Bob")?;
//!
//! game.record_score("Alice", 301)?;
//! assert_eq!(game.winner(), Some("Alice"));
//!
//! let outcome = game.process_redemption(&[Shot::new("Bob".into(), 60)])?;
//! assert_eq!(outcome, RedemptionOutcome::WinnerDeclared("Alice".into()));
//! assert!(game.is_over());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod invariants;
mod outcome;
mod rules;

// Crate-level exports - Actions
pub use action::Shot;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, GameUndecided, PlayerKnown, RedemptionContract, RedemptionOpen, ShotContract};
pub use invariants::{
    DartsInvariants, Invariant, InvariantSet, InvariantViolation, RedemptionExcludesWinner,
    ScoresWithinTarget, UniquePlayers, WinnerAtTarget,
};

// Crate-level exports - Engine
pub use error::GameError;
pub use game::{Game, Phase};
pub use outcome::{RedemptionOutcome, RoundKind, ShotOutcome};
pub use rules::{
    resolve_shot, GameRules, ShotResolution, DEFAULT_OVERTIME_INCREMENT, DEFAULT_TARGET_SCORE,
};
