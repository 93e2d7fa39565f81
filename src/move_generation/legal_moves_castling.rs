//! Castling move generation.
//!
//! Each lane lists the right it needs, the squares that must be empty between
//! king and rook, and the squares the king crosses, which must not be
//! attacked. The king's own square is checked separately: no castling out of
//! check.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::{Move, SpecialMove};

struct CastlingLane {
    right: CastlingRights,
    king_from: Square,
    king_to: Square,
    rook_home: Square,
    between: &'static [Square],
    king_path: [Square; 2],
}

const WHITE_LANES: [CastlingLane; 2] = [
    CastlingLane {
        right: CASTLE_WHITE_KINGSIDE,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_home: Square::H1,
        between: &[Square::F1, Square::G1],
        king_path: [Square::F1, Square::G1],
    },
    CastlingLane {
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_home: Square::A1,
        between: &[Square::B1, Square::C1, Square::D1],
        king_path: [Square::D1, Square::C1],
    },
];

const BLACK_LANES: [CastlingLane; 2] = [
    CastlingLane {
        right: CASTLE_BLACK_KINGSIDE,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_home: Square::H8,
        between: &[Square::F8, Square::G8],
        king_path: [Square::F8, Square::G8],
    },
    CastlingLane {
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_home: Square::A8,
        between: &[Square::B8, Square::C8, Square::D8],
        king_path: [Square::D8, Square::C8],
    },
];

pub fn generate_castling_moves(board: &Board, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let enemy = side.opposite();
    let lanes = match side {
        Color::White => &WHITE_LANES,
        Color::Black => &BLACK_LANES,
    };

    for lane in lanes {
        if !board.has_castling_right(lane.right)
            || board.pieces_of(side, PieceKind::King) & lane.king_from.bit() == 0
            || board.pieces_of(side, PieceKind::Rook) & lane.rook_home.bit() == 0
        {
            continue;
        }

        let between = lane.between.iter().fold(0u64, |acc, square| acc | square.bit());
        if board.occupied() & between != 0 {
            continue;
        }

        if is_square_attacked(board, lane.king_from, enemy)
            || lane
                .king_path
                .iter()
                .any(|&square| is_square_attacked(board, square, enemy))
        {
            continue;
        }

        out.push(
            Move::new(lane.king_from, lane.king_to, PieceKind::King, None)
                .with_special(SpecialMove::Castling),
        );
    }
}
