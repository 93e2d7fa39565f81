//! The board's single mutation primitive.
//!
//! `make_move` trusts its caller: the move must come from the legal move
//! generator for this exact board. Simulation goes through `after_move`, which
//! works on a clone and leaves the live board untouched.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::{Move, SpecialMove};

impl Board {
    pub fn make_move(&mut self, mv: &Move) {
        let us = self.side_to_move;
        let them = us.opposite();

        self.pieces[us.index()][mv.moved_piece.index()] &= !mv.from.bit();

        if mv.special == SpecialMove::EnPassant {
            // The captured pawn sits behind the target square.
            if let Some(victim) = mv.to.offset(0, -us.forward()) {
                self.pieces[them.index()][PieceKind::Pawn.index()] &= !victim.bit();
            }
        } else if let Some(captured) = mv.captured_piece {
            self.pieces[them.index()][captured.index()] &= !mv.to.bit();
        }

        let placed = mv.promotion_piece.unwrap_or(mv.moved_piece);
        self.pieces[us.index()][placed.index()] |= mv.to.bit();

        if mv.special == SpecialMove::Castling {
            if let Some((rook_from, rook_to)) = castling_rook_hop(mv.to) {
                let rooks = &mut self.pieces[us.index()][PieceKind::Rook.index()];
                *rooks = (*rooks & !rook_from.bit()) | rook_to.bit();
            }
        }

        self.castling_rights &= !(castling_rights_touching(mv.from) | castling_rights_touching(mv.to));

        self.en_passant_square = match mv.special {
            SpecialMove::DoublePawnPush => mv.from.offset(0, us.forward()),
            _ => None,
        };

        if mv.moved_piece == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if us == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = them;
        self.recalc_occupancy();
    }

    /// Disposable copy of the board with `mv` applied.
    pub fn after_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}

/// Rook origin and destination for the castling king landing on `king_to`.
pub fn castling_rook_hop(king_to: Square) -> Option<(Square, Square)> {
    match king_to {
        Square::G1 => Some((Square::H1, Square::F1)),
        Square::C1 => Some((Square::A1, Square::D1)),
        Square::G8 => Some((Square::H8, Square::F8)),
        Square::C8 => Some((Square::A8, Square::D8)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::{Move, SpecialMove};

    fn sq(text: &str) -> Square {
        text.parse().expect("square should parse")
    }

    #[test]
    fn double_push_sets_en_passant_for_one_ply() {
        let mut board = Board::new_game();
        board.make_move(
            &Move::new(sq("e2"), sq("e4"), PieceKind::Pawn, None)
                .with_special(SpecialMove::DoublePawnPush),
        );
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );

        board.make_move(&Move::new(sq("g8"), sq("f6"), PieceKind::Knight, None));
        assert_eq!(board.en_passant_square(), None);
        assert_eq!(board.halfmove_clock(), 1);
        assert_eq!(board.fullmove_number(), 2);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        board.make_move(
            &Move::new(sq("e5"), sq("d6"), PieceKind::Pawn, Some(PieceKind::Pawn))
                .with_special(SpecialMove::EnPassant),
        );
        assert_eq!(board.to_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 2");
    }

    #[test]
    fn castling_moves_rook_and_drops_rights() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").expect("FEN should parse");
        board.make_move(&Move::new(Square::E1, Square::G1, PieceKind::King, None).with_special(SpecialMove::Castling));
        assert_eq!(board.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 10");

        board.make_move(&Move::new(Square::E8, Square::C8, PieceKind::King, None).with_special(SpecialMove::Castling));
        assert_eq!(board.to_fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 5 11");
    }

    #[test]
    fn capturing_a_home_rook_revokes_its_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        board.make_move(&Move::new(Square::A1, Square::A8, PieceKind::Rook, Some(PieceKind::Rook)));
        assert_eq!(board.castling_rights(), CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE);
        assert_eq!(board.halfmove_clock(), 0);
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let mut board = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 7 40").expect("FEN should parse");
        board.make_move(
            &Move::new(sq("a7"), sq("b8"), PieceKind::Pawn, Some(PieceKind::Rook))
                .with_promotion(PieceKind::Knight),
        );
        assert_eq!(board.to_fen(), "1N2k3/8/8/8/8/8/8/4K3 b - - 0 40");
    }

    #[test]
    fn after_move_leaves_original_untouched() {
        let board = Board::new_game();
        let next = board.after_move(&Move::new(sq("g1"), sq("f3"), PieceKind::Knight, None));
        assert_eq!(board, Board::new_game());
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.piece_at(sq("f3")).map(|p| p.kind), Some(PieceKind::Knight));
    }
}
