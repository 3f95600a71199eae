//! Public search entry point.

use shakmaty::{Chess, Color, Move, Position};
use tracing::{debug, trace};
use web_time::Instant;

use super::alphabeta::{alphabeta, is_reportable_draw, perspective};
use crate::constants::{AB_INF, MAX_SEARCH_DEPTH, MIN_MEASURABLE_SECS};
use crate::error::{EngineError, EngineResult};
use crate::evaluation::evaluate_incremental;
use crate::types::{Score, SearchResult, SearchStats};

/// Selects the best move for `side_to_move`, searching `depth` plies.
///
/// `baseline` is the score of `position` relative to the side to move, as
/// maintained by the caller's running accumulator (callers holding a
/// canonical-frame accumulator negate it when White is on turn).
///
/// Reentrant and deterministic: identical inputs produce an identical move
/// and identical statistics. A `depth` of zero or a terminal root yields no
/// move rather than an error; out-of-range depth and a side-to-move
/// mismatch are boundary errors.
pub fn search(
    position: &Chess,
    side_to_move: Color,
    baseline: Score,
    depth: u32,
) -> EngineResult<SearchResult> {
    if depth > MAX_SEARCH_DEPTH {
        return Err(EngineError::DepthOutOfRange {
            depth,
            max: MAX_SEARCH_DEPTH,
        });
    }
    if side_to_move != position.turn() {
        return Err(EngineError::SideToMoveMismatch {
            requested: side_to_move,
            actual: position.turn(),
        });
    }

    let started = Instant::now();
    let mut leaves: u64 = 0;

    // Re-express the baseline in the canonical frame threaded through the
    // incremental updates.
    let running = perspective(side_to_move) * baseline;

    let moves = position.legal_moves();
    let mut best: Option<(Move, Score)> = None;

    if depth == 0 || moves.is_empty() || is_reportable_draw(position) {
        // Nothing to search; one static look at the root.
        leaves = 1;
    } else {
        let mut alpha = -AB_INF;
        let beta = AB_INF;

        for mv in &moves {
            let child = match position.clone().play(mv) {
                Ok(child) => child,
                Err(err) => {
                    debug!(?err, "rules engine rejected a generated move");
                    continue;
                }
            };

            let child_running = evaluate_incremental(&child, mv, running);
            let value = -alphabeta(&child, child_running, depth - 1, -beta, -alpha, &mut leaves);
            trace!(?mv, value, "root candidate scored");

            // Strict improvement keeps the first best move encountered in
            // generation order, making ties deterministic.
            if best.as_ref().map_or(true, |&(_, score)| value > score) {
                best = Some((mv.clone(), value));
            }
            if value > alpha {
                alpha = value;
            }
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    let stats = SearchStats {
        positions_evaluated: leaves,
        time_elapsed_seconds: elapsed,
        positions_per_second: leaves as f64 / elapsed.max(MIN_MEASURABLE_SECS),
    };

    let (best_move, score) = match best {
        Some((mv, value)) => (Some(mv), Some(value)),
        None => (None, None),
    };
    debug!(
        depth,
        positions = stats.positions_evaluated,
        elapsed_secs = stats.time_elapsed_seconds,
        chosen = ?best_move,
        "search complete"
    );

    Ok(SearchResult {
        best_move,
        score,
        stats,
    })
}
