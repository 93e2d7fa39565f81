//! Full legal move generation pipeline.
//!
//! Collects pseudo-legal moves piece by piece, plays each candidate on a copy
//! of the board, drops the ones that leave the mover's king attacked, and
//! records whether the survivor checks the opponent.

use crate::game_state::board::Board;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_castling::generate_castling_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_pieces::generate_piece_moves;
use crate::moves::chess_move::Move;

/// A legal move together with the position it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMove {
    pub chess_move: Move,
    pub board_after: Board,
    pub gives_check: bool,
}

/// Every move the side to move could make, ignoring king safety.
pub fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let mut pseudo = Vec::<Move>::with_capacity(128);
    generate_pawn_moves(board, &mut pseudo);
    generate_piece_moves(board, &mut pseudo);
    generate_castling_moves(board, &mut pseudo);
    pseudo
}

pub fn generate_legal_moves(board: &Board) -> Vec<GeneratedMove> {
    let mover = board.side_to_move();
    let pseudo = pseudo_legal_moves(board);

    let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());
    for mv in pseudo {
        let next = board.after_move(&mv);

        // Illegal if own king is in check after move.
        if is_king_in_check(&next, mover) {
            continue;
        }

        let gives_check = is_king_in_check(&next, mover.opposite());
        legal.push(GeneratedMove {
            chess_move: mv,
            board_after: next,
            gives_check,
        });
    }

    legal
}

/// Legal moves without the resulting positions.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    generate_legal_moves(board)
        .into_iter()
        .map(|generated| generated.chess_move)
        .collect()
}
