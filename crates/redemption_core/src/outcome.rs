//! Signals returned by the engine's mutating operations.
//!
//! The `Display` output of each signal matches the status strings the
//! scoreboard has always shown, so a front end can print them directly
//! while matching on the variants instead of on text.

use serde::{Deserialize, Serialize};

/// Which kind of round a redemption round belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RoundKind {
    /// The first race to the starting target.
    Regulation,
    /// Any round after a tie raised the target.
    Overtime,
}

/// Result of a normal-turn shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Points were added; play continues.
    Scored,
    /// The shot overshot the target and was discarded.
    Bust,
    /// The shooter hit the target exactly; everyone else owes a redemption shot.
    RedemptionRoundBegins(RoundKind),
}

// Written by hand: the redemption signal text depends on the nested round kind.
impl std::fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShotOutcome::Scored => write!(f, "Scored"),
            ShotOutcome::Bust => write!(f, "Bust"),
            ShotOutcome::RedemptionRoundBegins(RoundKind::Regulation) => {
                write!(f, "Redemption Round Begins")
            }
            ShotOutcome::RedemptionRoundBegins(RoundKind::Overtime) => {
                write!(f, "Overtime Redemption Round Begins")
            }
        }
    }
}

/// Result of resolving a redemption batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RedemptionOutcome {
    /// Nobody tied; the provisional winner is final.
    #[display("Winner: {}", _0)]
    WinnerDeclared(String),

    /// At least one player tied; these players advance to a higher target.
    #[display("Players advancing to {}", target)]
    AdvancedToOvertime {
        /// The raised target for the new round.
        target: i32,
        /// Tying players in shot order, followed by the previous leader.
        players: Vec<String>,
    },
}

impl RedemptionOutcome {
    /// Returns the declared winner, if the round produced one.
    pub fn winner(&self) -> Option<&str> {
        match self {
            RedemptionOutcome::WinnerDeclared(name) => Some(name),
            RedemptionOutcome::AdvancedToOvertime { .. } => None,
        }
    }
}
