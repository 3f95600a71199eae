//! Piece-square tables for positional evaluation.
//!
//! Values are in centipawns from White's point of view, indexed `a1 = 0`
//! through `h8 = 63`. Black reads the board upside down via a `63 - square`
//! flip. Every bonus is attributable to a single piece on a single square,
//! which is what keeps the incremental evaluator exact.

use shakmaty::{Color, Role, Square};

use crate::types::Score;

const PAWN_PST: [Score; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

const KNIGHT_PST: [Score; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

const BISHOP_PST: [Score; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

const ROOK_PST: [Score; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

const QUEEN_PST: [Score; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  5,  5,  5,  5,  5,  0,-10,
     0,  0,  5,  5,  5,  5,  0, -5,
    -5,  0,  5,  5,  5,  5,  0, -5,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

const KING_PST: [Score; 64] = [
    20, 30, 10,  0,  0, 10, 30, 20,
    20, 20,  0,  0,  0,  0, 20, 20,
   -10,-20,-20,-20,-20,-20,-20,-10,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
];

/// Positional bonus for a piece of the given color standing on `square`,
/// from that side's own perspective.
pub(crate) fn pst_bonus(role: Role, color: Color, square: Square) -> Score {
    let index = match color {
        Color::White => square as usize,
        Color::Black => 63 - square as usize,
    };

    match role {
        Role::Pawn => PAWN_PST[index],
        Role::Knight => KNIGHT_PST[index],
        Role::Bishop => BISHOP_PST[index],
        Role::Rook => ROOK_PST[index],
        Role::Queen => QUEEN_PST[index],
        Role::King => KING_PST[index],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_central_pawn_outranks_edge_pawn() {
        assert!(
            pst_bonus(Role::Pawn, Color::White, Square::D4)
                > pst_bonus(Role::Pawn, Color::White, Square::A4)
        );
    }

    #[test]
    fn test_black_reads_tables_flipped() {
        // d4 for White mirrors e5 for Black under the 180-degree flip.
        assert_eq!(
            pst_bonus(Role::Knight, Color::White, Square::D4),
            pst_bonus(Role::Knight, Color::Black, Square::E5)
        );
    }

    #[test]
    fn test_king_prefers_back_rank_shelter() {
        assert!(
            pst_bonus(Role::King, Color::White, Square::G1)
                > pst_bonus(Role::King, Color::White, Square::E4)
        );
        assert!(
            pst_bonus(Role::King, Color::Black, Square::G8)
                > pst_bonus(Role::King, Color::Black, Square::E5)
        );
    }
}
