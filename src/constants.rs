//! Evaluation values and search parameters.
//!
//! Piece values are in centipawns (1/100th of a pawn), the standard unit
//! for chess evaluation: fine-grained scoring with integer arithmetic.
//! The 100/300/300/500/900 scheme is the most common one; positional
//! nuances (open positions favor bishops, closed positions favor knights)
//! belong to the piece-square tables, not these base values.

use crate::types::Score;

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 300;
pub const BISHOP_VALUE: Score = 300;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;

/// Higher than all other material combined, so no amount of material
/// compensates for getting mated.
pub const KING_VALUE: Score = 18_000;

/// Score assigned to a checkmated position (sign per the canonical frame).
pub const MATE_SCORE: Score = KING_VALUE;

/// Unreachable bound for the alpha-beta window.
pub const AB_INF: Score = 32_000;

/// Hard ply ceiling for [`crate::search::search`]. Depth is the engine's
/// only resource bound, so it is validated at the boundary instead of
/// trusting callers with the recursion depth.
pub const MAX_SEARCH_DEPTH: u32 = 6;

/// Default search depth (the "Medium" difficulty level).
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Hint-mode searches are capped at this depth: a suggestion only needs to
/// be plausible, not strong, and it runs on the interactive path.
pub const HINT_DEPTH: u32 = 2;

/// Floor for elapsed time when deriving positions-per-second, so that
/// sub-measurable searches do not divide by zero.
pub const MIN_MEASURABLE_SECS: f64 = 1e-6;
