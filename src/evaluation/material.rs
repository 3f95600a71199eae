//! Material values.

use shakmaty::Role;

use crate::constants::*;
use crate::types::Score;

/// Base material value of a piece, in centipawns.
pub fn piece_value(role: Role) -> Score {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}
