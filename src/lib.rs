//! Search and evaluation core for the Maestro browser chess game.
//!
//! Board rendering, input handling and move-history bookkeeping live in the
//! host UI; move generation, legality and terminal-state detection are
//! delegated to [`shakmaty`]. What this crate owns is the part with actual
//! engineering content:
//!
//! - [`evaluation`] - static position scoring plus an exact incremental
//!   variant that updates a previous score from a single move.
//! - [`search`] - fixed-depth negamax with alpha-beta pruning, reporting
//!   search cost (positions evaluated, elapsed time, throughput) per call.
//! - [`api`] - the session layer that owns the running advantage
//!   accumulator and drives the rules engine on behalf of the UI.
//!
//! Scores use a single canonical frame throughout: positive favors Black,
//! negative favors White. Inside the search, scores are re-expressed
//! relative to the side to move (negamax convention); the session layer
//! performs the sign flips so UI code only ever sees the canonical frame.
//!
//! The search is synchronous and blocking. Hosts that need a responsive UI
//! while the engine thinks (every browser host does) schedule the call off
//! the interactive thread themselves.

pub mod api;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod search;
pub mod types;

pub use api::{EngineReply, GameSession, GameState, PlayerColor};
pub use error::{EngineError, EngineResult};
pub use evaluation::{evaluate, evaluate_incremental};
pub use search::search;
pub use types::{Difficulty, Score, SearchResult, SearchStats};
