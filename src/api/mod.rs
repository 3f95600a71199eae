//! Caller-facing session layer.
//!
//! The host UI talks to the engine exclusively through this module: it
//! owns the running advantage accumulator, applies moves through the rules
//! engine, and hands serializable snapshots back to the board widget.

mod game;
mod moves;
mod state;

pub use game::{EngineReply, GameSession};
pub use moves::legal_targets;
pub use state::{GameState, PlayerColor};
