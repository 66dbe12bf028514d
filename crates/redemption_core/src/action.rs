//! Shot actions.
//!
//! A shot is a player's recorded points for one turn. Redemption rounds are
//! resolved from a batch of shots, so shots are first-class values that can
//! be collected, serialized and replayed.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Points scored by one player on one turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Shot {
    /// The player who threw.
    pub player: String,
    /// Points scored; zero and negative values are accepted arithmetically.
    pub points: i32,
}

impl std::fmt::Display for Shot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.points)
    }
}
