//! Game session: accumulator ownership and engine orchestration.

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, Move, Position, Square};
use tracing::debug;

use super::moves::resolve_move;
use super::state::GameState;
use crate::constants::{DEFAULT_SEARCH_DEPTH, HINT_DEPTH};
use crate::error::{EngineError, EngineResult};
use crate::evaluation::{evaluate, evaluate_incremental};
use crate::search::search;
use crate::types::{Difficulty, Score, SearchStats};

/// The engine's answer to [`GameSession::engine_reply`].
#[derive(Debug, Clone)]
pub struct EngineReply {
    /// The move that was chosen and applied.
    pub mv: Move,
    /// Best score at the root, relative to the side the engine moved for.
    pub score: Score,
    /// Cost of the underlying search.
    pub stats: SearchStats,
    /// Refreshed advantage after the move (positive favors Black).
    pub advantage: Score,
}

/// One game against the engine.
///
/// Holds the current position and the running advantage accumulator. The
/// accumulator always equals a full [`evaluate`] of the position, but is
/// maintained incrementally: a value threaded through every move-applying
/// operation rather than recomputed by board scan.
#[derive(Debug, Clone)]
pub struct GameSession {
    position: Chess,
    advantage: Score,
    depth: u32,
}

impl GameSession {
    /// New game at the starting position with the default search depth.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_SEARCH_DEPTH)
    }

    /// New game at the starting position searching `depth` plies.
    pub fn with_depth(depth: u32) -> Self {
        let position = Chess::default();
        let advantage = evaluate(&position);
        GameSession {
            position,
            advantage,
            depth,
        }
    }

    /// New game at the given difficulty level.
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::with_depth(difficulty.search_depth())
    }

    /// Resume from an opaque board-state string produced by the rules
    /// engine.
    pub fn from_fen(fen: &str, depth: u32) -> EngineResult<Self> {
        let setup: Fen = fen.parse()?;
        let position: Chess = setup
            .into_position(CastlingMode::Standard)
            .map_err(|err| EngineError::InvalidPosition(err.to_string()))?;
        let advantage = evaluate(&position);
        Ok(GameSession {
            position,
            advantage,
            depth,
        })
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    /// Current advantage (positive favors Black), as shown on the
    /// evaluation bar.
    pub fn advantage(&self) -> Score {
        self.advantage
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Change the search depth for subsequent engine replies.
    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    /// Whether the game has reached a state the session can adjudicate.
    /// Repetition draws are claimed by the UI, which owns move history.
    pub fn is_game_over(&self) -> bool {
        self.position.is_checkmate()
            || self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.position.halfmoves() >= 100
    }

    /// Snapshot for the status display.
    pub fn state(&self) -> GameState {
        GameState::from_position(&self.position)
    }

    /// Legal destinations for the piece on `from` (board highlighting).
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        super::moves::legal_targets(&self.position, from)
    }

    /// Plays the human move described by a from/to pair, promotion
    /// defaulting to queen. On error the session is unchanged.
    pub fn play_move(&mut self, from: Square, to: Square) -> EngineResult<Move> {
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }
        let mv = resolve_move(&self.position, from, to)
            .ok_or(EngineError::IllegalMove { from, to })?;
        self.apply(&mv)?;
        Ok(mv)
    }

    /// Searches for, applies, and reports the engine's move.
    pub fn engine_reply(&mut self) -> EngineResult<EngineReply> {
        if self.is_game_over() {
            return Err(EngineError::GameOver);
        }

        let side = self.position.turn();
        let result = search(&self.position, side, self.baseline(side), self.depth)?;

        let (Some(mv), Some(score)) = (result.best_move, result.score) else {
            // Terminal roots are filtered above; treat "no move" as over.
            return Err(EngineError::GameOver);
        };

        self.apply(&mv)?;
        debug!(
            chosen = ?mv,
            score,
            advantage = self.advantage,
            positions = result.stats.positions_evaluated,
            "engine reply"
        );

        Ok(EngineReply {
            mv,
            score,
            stats: result.stats,
            advantage: self.advantage,
        })
    }

    /// Suggests a move for the side about to play without committing it.
    /// Same search, shallower budget; returns `None` on finished games.
    pub fn hint(&self) -> EngineResult<Option<Move>> {
        if self.is_game_over() {
            return Ok(None);
        }
        let side = self.position.turn();
        let result = search(
            &self.position,
            side,
            self.baseline(side),
            self.depth.min(HINT_DEPTH),
        )?;
        Ok(result.best_move)
    }

    /// Accumulator re-expressed relative to the side to move.
    fn baseline(&self, side: Color) -> Score {
        match side {
            Color::Black => self.advantage,
            Color::White => -self.advantage,
        }
    }

    /// Applies an engine-validated move and refreshes the accumulator.
    fn apply(&mut self, mv: &Move) -> EngineResult<()> {
        let next = self
            .position
            .clone()
            .play(mv)
            .map_err(|_| EngineError::IllegalMove {
                from: mv.from().unwrap_or(mv.to()),
                to: mv.to(),
            })?;
        self.advantage = evaluate_incremental(&next, mv, self.advantage);
        self.position = next;
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
