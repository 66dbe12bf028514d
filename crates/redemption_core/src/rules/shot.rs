//! Three-way shot resolution: bust, exact hit, or undershoot.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a shot resolves against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotResolution {
    /// The new total would exceed the target; the shot is discarded.
    Bust,
    /// The new total equals the target.
    Exact(i32),
    /// The new total stays below the target.
    Under(i32),
}

impl ShotResolution {
    /// Returns the total to store, or `None` when the shot busted.
    pub fn new_total(&self) -> Option<i32> {
        match self {
            ShotResolution::Bust => None,
            ShotResolution::Exact(total) | ShotResolution::Under(total) => Some(*total),
        }
    }
}

/// Resolves `points` added to `total` against `target`.
///
/// Addition saturates, so extreme inputs bust instead of wrapping.
#[instrument]
pub fn resolve_shot(total: i32, points: i32, target: i32) -> ShotResolution {
    let new_total = total.saturating_add(points);
    match new_total.cmp(&target) {
        std::cmp::Ordering::Greater => ShotResolution::Bust,
        std::cmp::Ordering::Equal => ShotResolution::Exact(new_total),
        std::cmp::Ordering::Less => ShotResolution::Under(new_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overshoot_busts() {
        assert_eq!(resolve_shot(250, 60, 301), ShotResolution::Bust);
        assert_eq!(resolve_shot(250, 60, 301).new_total(), None);
    }

    #[test]
    fn test_exact_hit() {
        let resolution = resolve_shot(200, 101, 301);
        assert_eq!(resolution, ShotResolution::Exact(301));
        assert_eq!(resolution.new_total(), Some(301));
    }

    #[test]
    fn test_undershoot_accumulates() {
        assert_eq!(resolve_shot(0, 60, 301), ShotResolution::Under(60));
    }

    #[test]
    fn test_negative_points_accepted() {
        assert_eq!(resolve_shot(50, -20, 301), ShotResolution::Under(30));
    }

    #[test]
    fn test_saturating_add_busts() {
        assert_eq!(resolve_shot(300, i32::MAX, 301), ShotResolution::Bust);
    }
}
