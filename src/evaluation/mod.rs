//! Position evaluation.
//!
//! Scores are centipawns in the canonical frame: positive favors Black,
//! negative favors White. The evaluation is a pure function of the board
//! state, composed of material plus piece-square bonuses, with constant
//! scores for the two successor-free terminal states (checkmate,
//! stalemate).
//!
//! Every non-terminal component is per-piece additive. That is a hard
//! constraint, not a style choice: [`evaluate_incremental`] must reproduce
//! [`evaluate`] exactly after any legal move, so terms that depend on more
//! than one piece at a time (mobility, king tropism) are excluded.

mod incremental;
mod material;
mod pst;

pub use incremental::evaluate_incremental;
pub use material::piece_value;

use shakmaty::{Chess, Color, Position, Square};

use crate::constants::MATE_SCORE;
use crate::types::Score;

/// Full static evaluation of a position.
pub fn evaluate(position: &Chess) -> Score {
    if let Some(score) = terminal_score(position) {
        return score;
    }

    let board = position.board();
    let mut score = 0;
    for square in Square::ALL {
        if let Some(piece) = board.piece_at(square) {
            let worth = piece_value(piece.role) + pst::pst_bonus(piece.role, piece.color, square);
            score += match piece.color {
                Color::Black => worth,
                Color::White => -worth,
            };
        }
    }
    score
}

/// Constant score for positions with no legal moves, `None` otherwise.
///
/// Only checkmate and stalemate are scored here. Both are successor-free,
/// so returning a constant can never desynchronize a running incremental
/// score. Draw states that still have successors (insufficient material,
/// move-rule horizon) are adjudicated by the search instead.
pub(crate) fn terminal_score(position: &Chess) -> Option<Score> {
    if position.is_checkmate() {
        // The side to move is the side that got mated.
        Some(match position.turn() {
            Color::White => MATE_SCORE,
            Color::Black => -MATE_SCORE,
        })
    } else if position.is_stalemate() {
        Some(0)
    } else {
        None
    }
}
