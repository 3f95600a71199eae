//! Move resolution helpers for the board widget.

use shakmaty::{Chess, Move, Position, Role, Square};

/// Legal destination squares for the piece on `from`, for click/drag
/// highlighting. Promotions collapse to a single destination.
pub fn legal_targets(position: &Chess, from: Square) -> Vec<Square> {
    let mut targets: Vec<Square> = position
        .legal_moves()
        .iter()
        .filter(|m| m.from() == Some(from))
        .map(|m| m.to())
        .collect();
    targets.sort_unstable();
    targets.dedup();
    targets
}

/// Resolves a from/to pair against the engine's legal moves.
///
/// Promotions default to queen: the board widget does not show an
/// underpromotion dialog.
pub(crate) fn resolve_move(position: &Chess, from: Square, to: Square) -> Option<Move> {
    position
        .legal_moves()
        .iter()
        .filter(|m| m.from() == Some(from) && m.to() == to)
        .find(|m| m.promotion().is_none() || m.promotion() == Some(Role::Queen))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::fen::Fen;
    use shakmaty::CastlingMode;

    fn position(fen: &str) -> Chess {
        fen.parse::<Fen>()
            .expect("valid FEN")
            .into_position(CastlingMode::Standard)
            .expect("legal position")
    }

    #[test]
    fn test_knight_targets_from_the_start() {
        let targets = legal_targets(&Chess::default(), Square::G1);
        assert_eq!(targets, vec![Square::F3, Square::H3]);
    }

    #[test]
    fn test_empty_square_has_no_targets() {
        assert!(legal_targets(&Chess::default(), Square::E4).is_empty());
    }

    #[test]
    fn test_promotion_resolves_to_queen() {
        let pos = position("8/P6k/8/8/8/8/7K/8 w - - 0 1");
        let mv = resolve_move(&pos, Square::A7, Square::A8).expect("promotion is legal");
        assert_eq!(mv.promotion(), Some(Role::Queen));
    }

    #[test]
    fn test_promotion_square_listed_once() {
        let pos = position("8/P6k/8/8/8/8/7K/8 w - - 0 1");
        let targets = legal_targets(&pos, Square::A7);
        assert_eq!(targets, vec![Square::A8]);
    }

    #[test]
    fn test_unrelated_squares_do_not_resolve() {
        assert!(resolve_move(&Chess::default(), Square::E2, Square::E6).is_none());
    }

    #[test]
    fn test_castling_resolves_from_king_squares() {
        let pos = position("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        let mv = resolve_move(&pos, Square::E1, Square::G1).expect("castling is legal");
        assert!(mv.is_castle());
    }
}
