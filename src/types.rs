//! Shared value types crossing the engine's public boundary.

use serde::{Deserialize, Serialize};
use shakmaty::Move;

/// Signed position score in centipawns.
///
/// Canonical frame: positive favors Black, negative favors White. The
/// search internally re-expresses scores relative to the side to move.
pub type Score = i32;

/// Cost statistics for one top-level search call.
///
/// Computed once per invocation, never per recursive call. The host UI
/// displays these verbatim (positions / time / speed panel).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Leaf and terminal evaluations performed, not nodes visited.
    pub positions_evaluated: u64,
    /// Wall-clock duration of the whole call, in seconds.
    pub time_elapsed_seconds: f64,
    /// `positions_evaluated` over elapsed time, epsilon-guarded.
    pub positions_per_second: f64,
}

/// Outcome of one search call.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move selected for the side to move. `None` only when the root
    /// is terminal or the depth budget is zero.
    pub best_move: Option<Move>,
    /// Best score at the root, relative to the side to move. Present
    /// exactly when `best_move` is.
    pub score: Option<Score>,
    /// Cost of producing this result.
    pub stats: SearchStats,
}

/// Difficulty ladder exposed by the settings UI, mapped to search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Search depth in plies for this level.
    pub fn search_depth(self) -> u32 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};

    #[test]
    fn test_difficulty_depths_increase() {
        let ladder = [
            Difficulty::Beginner,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0].search_depth() < pair[1].search_depth());
        }
    }

    #[test]
    fn test_difficulty_depths_within_supported_range() {
        for level in [
            Difficulty::Beginner,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ] {
            assert!(level.search_depth() >= 1);
            assert!(level.search_depth() <= MAX_SEARCH_DEPTH);
        }
    }

    #[test]
    fn test_default_difficulty_matches_default_depth() {
        assert_eq!(Difficulty::default().search_depth(), DEFAULT_SEARCH_DEPTH);
    }
}
