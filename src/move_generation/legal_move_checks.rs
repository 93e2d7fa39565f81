//! Attack and check detection.
//!
//! A square is attacked by a color when one of its pieces could capture there
//! pseudo-legally, ignoring whether that would expose its own king.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::attack_tables::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let attackers = |kind: PieceKind| board.pieces_of(attacker_color, kind);
    let occupancy = board.occupied();

    // Attack patterns are symmetric, so look outward from the target square.
    // Pawns are the exception: use the defender's capture direction.
    if pawn_attacks(attacker_color.opposite(), square) & attackers(PieceKind::Pawn) != 0 {
        return true;
    }
    if knight_attacks(square) & attackers(PieceKind::Knight) != 0 {
        return true;
    }
    if king_attacks(square) & attackers(PieceKind::King) != 0 {
        return true;
    }

    let queens = attackers(PieceKind::Queen);
    if bishop_attacks(square, occupancy) & (attackers(PieceKind::Bishop) | queens) != 0 {
        return true;
    }
    rook_attacks(square, occupancy) & (attackers(PieceKind::Rook) | queens) != 0
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}
