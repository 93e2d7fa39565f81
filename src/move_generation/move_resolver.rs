//! Turns user-supplied square text into a concrete legal move.
//!
//! Coordinates are validated before the move list is consulted, so malformed
//! text is always reported as an invalid coordinate even when the pair could
//! never be legal anyway.

use log::debug;

use crate::chess_errors::Rejection;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::long_algebraic::{promotion_from_text, split_long_algebraic};

/// Finds the legal move from `from` to `to`.
///
/// Without a promotion letter a promoting pair resolves to the queen
/// promotion. With one, it must name a legal promotion for the pair; a letter
/// on a non-promoting move is refused. A blank promotion counts as absent.
pub fn resolve(board: &Board, from: &str, to: &str, promotion: Option<&str>) -> Result<Move, Rejection> {
    let from_sq = algebraic_to_square(from)?;
    let to_sq = algebraic_to_square(to)?;

    let promotion = match promotion.map(str::trim).filter(|text| !text.is_empty()) {
        Some(text) => Some(promotion_from_text(text).ok_or_else(|| {
            debug!("unknown promotion piece {text:?}");
            Rejection::IllegalMove
        })?),
        None => None,
    };

    resolve_squares(board, from_sq, to_sq, promotion)
}

pub fn resolve_squares(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<Move, Rejection> {
    let candidates: Vec<Move> = legal_moves(board)
        .into_iter()
        .filter(|mv| mv.from == from && mv.to == to)
        .collect();

    let wanted = promotion.or_else(|| {
        candidates
            .iter()
            .any(Move::is_promotion)
            .then_some(PieceKind::Queen)
    });

    let resolved = candidates
        .into_iter()
        .find(|mv| mv.promotion_piece == wanted);

    match resolved {
        Some(mv) => {
            debug!("resolved {from}{to} to {mv}");
            Ok(mv)
        }
        None => {
            debug!("no legal move {from}{to} (promotion {promotion:?})");
            Err(Rejection::IllegalMove)
        }
    }
}

/// Resolves a single UCI string such as `e2e4` or `e7e8q`.
pub fn resolve_uci(board: &Board, uci: &str) -> Result<Move, Rejection> {
    let (from, to, promotion) = split_long_algebraic(uci)?;
    resolve(board, from, to, promotion)
}
