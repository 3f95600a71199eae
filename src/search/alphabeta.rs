//! Inner negamax recursion with alpha-beta pruning.

use shakmaty::{Chess, Color, Position};
use tracing::debug;

use crate::constants::AB_INF;
use crate::evaluation::evaluate_incremental;
use crate::types::Score;

/// Sign that converts a canonical-frame score (positive favors Black) into
/// a score relative to `side`.
pub(super) fn perspective(side: Color) -> Score {
    match side {
        Color::Black => 1,
        Color::White => -1,
    }
}

/// Draw states the rules engine reports on positions that still have legal
/// successors. Scored by the search rather than the evaluator, so that the
/// incremental score invariant stays exact.
pub(super) fn is_reportable_draw(position: &Chess) -> bool {
    position.is_insufficient_material() || position.halfmoves() >= 100
}

/// Negamax over `position` with `running` holding the canonical-frame
/// score of `position` itself, maintained incrementally along the path.
///
/// Returns the best score relative to the side to move. `leaves` counts
/// leaf/terminal evaluations for the caller's statistics.
pub(super) fn alphabeta(
    position: &Chess,
    running: Score,
    depth: u32,
    mut alpha: Score,
    beta: Score,
    leaves: &mut u64,
) -> Score {
    if is_reportable_draw(position) {
        *leaves += 1;
        return 0;
    }

    let moves = position.legal_moves();

    // Leaf: depth exhausted, or no legal moves (checkmate/stalemate, whose
    // constants `running` already carries).
    if depth == 0 || moves.is_empty() {
        *leaves += 1;
        return perspective(position.turn()) * running;
    }

    let mut best = -AB_INF;
    for mv in &moves {
        let child = match position.clone().play(mv) {
            Ok(child) => child,
            Err(err) => {
                // Should not happen for engine-generated moves; skip the
                // candidate and keep the search total.
                debug!(?err, "rules engine rejected a generated move");
                continue;
            }
        };

        let child_running = evaluate_incremental(&child, mv, running);
        let value = -alphabeta(&child, child_running, depth - 1, -beta, -alpha, leaves);

        if value > best {
            best = value;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // beta cutoff: remaining siblings cannot matter
        }
    }

    if best == -AB_INF {
        // Every candidate failed to apply; score the node as a dead end.
        *leaves += 1;
        return 0;
    }

    best
}
