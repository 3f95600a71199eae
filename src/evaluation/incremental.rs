//! Incremental evaluation.
//!
//! Updates a previous score from the single move that was just played,
//! instead of re-scanning the whole board. Exactness invariant: for any
//! position `p` with legal move `m`,
//! `evaluate_incremental(p.play(m), m, evaluate(p)) == evaluate(p.play(m))`.

use shakmaty::{CastlingSide, Chess, Color, Move, Position, Role, Square};

use super::material::piece_value;
use super::pst::pst_bonus;
use super::terminal_score;
use crate::types::Score;

/// Score of `position` given the `mv` that produced it and the score of
/// its parent.
///
/// `position` is the state *after* `mv` was applied by the rules engine.
pub fn evaluate_incremental(position: &Chess, mv: &Move, previous: Score) -> Score {
    if let Some(score) = terminal_score(position) {
        return score;
    }
    // The mover is the side that is no longer on turn.
    previous + move_delta(mv, !position.turn())
}

/// Exact canonical-frame score change caused by `mv`, played by `mover`.
fn move_delta(mv: &Move, mover: Color) -> Score {
    let sign: Score = match mover {
        Color::Black => 1,
        Color::White => -1,
    };

    match *mv {
        Move::Normal {
            role,
            from,
            capture,
            to,
            promotion,
        } => {
            let landed = promotion.unwrap_or(role);
            let mut delta = piece_value(landed) + pst_bonus(landed, mover, to)
                - piece_value(role)
                - pst_bonus(role, mover, from);
            if let Some(victim) = capture {
                delta += piece_value(victim) + pst_bonus(victim, !mover, to);
            }
            sign * delta
        }
        Move::EnPassant { from, to } => {
            // The captured pawn stands beside the destination, not on it.
            let victim_square = Square::from_coords(to.file(), from.rank());
            let delta = pst_bonus(Role::Pawn, mover, to) - pst_bonus(Role::Pawn, mover, from)
                + piece_value(Role::Pawn)
                + pst_bonus(Role::Pawn, !mover, victim_square);
            sign * delta
        }
        Move::Castle { king, rook } => {
            // Both the king and the rook relocate; material is unchanged.
            let side = if rook < king {
                CastlingSide::QueenSide
            } else {
                CastlingSide::KingSide
            };
            let king_to = Square::from_coords(side.king_to_file(), king.rank());
            let rook_to = Square::from_coords(side.rook_to_file(), rook.rank());
            let delta = pst_bonus(Role::King, mover, king_to) - pst_bonus(Role::King, mover, king)
                + pst_bonus(Role::Rook, mover, rook_to)
                - pst_bonus(Role::Rook, mover, rook);
            sign * delta
        }
        // Drops only exist in pocket variants; `Chess` never produces them.
        Move::Put { .. } => 0,
    }
}
