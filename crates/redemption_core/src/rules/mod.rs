//! Game rules for exact-target darts.
//!
//! Shot resolution is a pure function over a running total and the current
//! target, shared by normal turns and redemption shots. Rule parameters
//! (starting target, overtime increment) live alongside it.

pub mod settings;
pub mod shot;

pub use settings::{GameRules, DEFAULT_OVERTIME_INCREMENT, DEFAULT_TARGET_SCORE};
pub use shot::{resolve_shot, ShotResolution};
