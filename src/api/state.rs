//! Serializable game-state snapshot for the UI boundary.

use serde::{Deserialize, Serialize};
use shakmaty::fen::Fen;
use shakmaty::{Chess, Color, EnPassantMode, Position};

/// Side color as exchanged with the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    White,
    Black,
}

impl From<Color> for PlayerColor {
    fn from(color: Color) -> Self {
        match color {
            Color::White => PlayerColor::White,
            Color::Black => PlayerColor::Black,
        }
    }
}

/// Snapshot of the rules engine's view of the game, for status display.
///
/// The FEN string is produced by the rules engine and passed through
/// opaquely; this crate never parses or interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub fen: String,
    pub turn: PlayerColor,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_insufficient_material: bool,
    pub is_draw: bool,
}

impl GameState {
    pub(crate) fn from_position(position: &Chess) -> Self {
        let is_stalemate = position.is_stalemate();
        let is_insufficient_material = position.is_insufficient_material();
        GameState {
            fen: Fen::from_position(position.clone(), EnPassantMode::Legal).to_string(),
            turn: position.turn().into(),
            is_check: position.is_check(),
            is_checkmate: position.is_checkmate(),
            is_stalemate,
            is_insufficient_material,
            // Threefold repetition needs move history, which the UI owns;
            // it is adjudicated there.
            is_draw: is_stalemate || is_insufficient_material || position.halfmoves() >= 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_the_starting_position() {
        let state = GameState::from_position(&Chess::default());
        assert_eq!(state.turn, PlayerColor::White);
        assert!(!state.is_check);
        assert!(!state.is_checkmate);
        assert!(!state.is_draw);
        assert!(state.fen.starts_with("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w"));
    }

    #[test]
    fn test_snapshot_serializes_with_camel_case_keys() {
        let state = GameState::from_position(&Chess::default());
        let json = serde_json::to_string(&state).expect("serializes");
        assert!(json.contains("\"isCheckmate\""));
        assert!(json.contains("\"turn\":\"white\""));
    }
}
