//! Pawn move generation.
//!
//! Pushes, double pushes, diagonal captures, en passant and the four
//! promotion choices on the last rank.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::en_passant_rank;
use crate::game_state::chess_types::*;
use crate::moves::attack_tables::pawn_attacks;
use crate::moves::chess_move::{Move, SpecialMove};

/// Pseudo-legal pawn moves: pushes, double pushes, captures, en passant and
/// all four promotion choices.
pub fn generate_pawn_moves(board: &Board, out: &mut Vec<Move>) {
    let side = board.side_to_move();
    let forward = side.forward();
    let empty = !board.occupied();
    let enemy_occ = board.occupancy(side.opposite());
    let (start_rank, promotion_rank) = match side {
        Color::White => (1, 7),
        Color::Black => (6, 0),
    };
    // The target must sit behind an enemy pawn on the rank a double push from
    // the opponent would have produced.
    let en_passant = board.en_passant_square().filter(|target| {
        if target.rank() != en_passant_rank(side) {
            return false;
        }
        let victim = target.offset(0, -forward);
        victim.is_some_and(|victim| {
            victim.bit() & board.pieces_of(side.opposite(), PieceKind::Pawn) != 0
                && target.bit() & empty != 0
        })
    });

    let push = |from: Square, to: Square, captured: Option<PieceKind>, out: &mut Vec<Move>| {
        let mv = Move::new(from, to, PieceKind::Pawn, captured);
        if to.rank() == promotion_rank {
            out.extend(PieceKind::PROMOTIONS.map(|promo| mv.with_promotion(promo)));
        } else {
            out.push(mv);
        }
    };

    for from in squares_of(board.pieces_of(side, PieceKind::Pawn)) {
        if let Some(one_step) = from.offset(0, forward).filter(|to| to.bit() & empty != 0) {
            push(from, one_step, None, out);

            if from.rank() == start_rank {
                if let Some(two_step) = one_step.offset(0, forward).filter(|to| to.bit() & empty != 0) {
                    out.push(
                        Move::new(from, two_step, PieceKind::Pawn, None)
                            .with_special(SpecialMove::DoublePawnPush),
                    );
                }
            }
        }

        let targets = pawn_attacks(side, from);
        for to in squares_of(targets & enemy_occ) {
            let captured = board.piece_at(to).map(|piece| piece.kind);
            push(from, to, captured, out);
        }

        if let Some(ep) = en_passant {
            if targets & ep.bit() != 0 {
                out.push(
                    Move::new(from, ep, PieceKind::Pawn, Some(PieceKind::Pawn))
                        .with_special(SpecialMove::EnPassant),
                );
            }
        }
    }
}
