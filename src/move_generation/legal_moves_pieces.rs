//! Pseudo-legal moves for knights, sliders and king steps.
//!
//! All five kinds share one loop: the attack table of the kind, minus our own
//! pieces, is the target set. Castling lives in `legal_moves_castling`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::attack_tables::piece_attacks;
use crate::moves::chess_move::Move;

const NON_PAWN_KINDS: [PieceKind; 5] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

pub fn generate_piece_moves(board: &Board, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let own_occ = board.occupancy(side);

    for kind in NON_PAWN_KINDS {
        let piece = Piece::new(side, kind);
        for from in squares_of(board.pieces_of(side, kind)) {
            let targets = piece_attacks(piece, from, board.occupied()) & !own_occ;
            for to in squares_of(targets) {
                let captured = board.piece_at(to).map(|target| target.kind);
                out.push(Move::new(from, to, kind, captured));
            }
        }
    }
}
