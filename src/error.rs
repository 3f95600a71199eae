//! Error types for the engine core.
//!
//! Every fallible boundary operation returns [`EngineError`]; the search
//! itself never fails once its inputs pass validation (anomalies degrade to
//! "no move found" instead of propagating).

use shakmaty::{Color, Square};
use thiserror::Error;

/// Errors surfaced at the engine's public boundary.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The board-state string could not be parsed.
    #[error("invalid FEN string: {0}")]
    InvalidFen(#[from] shakmaty::fen::ParseFenError),

    /// The parsed setup does not describe a playable position.
    #[error("position setup is not playable: {0}")]
    InvalidPosition(String),

    /// Requested search depth is outside the supported range.
    #[error("search depth {depth} is outside the supported range 0..={max}")]
    DepthOutOfRange { depth: u32, max: u32 },

    /// The caller's idea of the side to move disagrees with the position.
    #[error("search was asked to move {requested:?} but {actual:?} is on turn")]
    SideToMoveMismatch { requested: Color, actual: Color },

    /// No legal move exists between the given squares.
    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The game has already reached a terminal state.
    #[error("the game is already over")]
    GameOver,
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
