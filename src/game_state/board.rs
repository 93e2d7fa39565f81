//! Board model: piece placement plus the auxiliary state of a position.
//!
//! `Board` stores per-color, per-kind bitboards with occupancy caches, the side
//! to move, castling rights, the en-passant target and the move counters. It
//! answers read queries and offers a single mutation primitive,
//! [`Board::make_move`] (see `move_generation::legal_move_apply`), which trusts
//! its caller to pass a legal move.

use crate::chess_errors::FenError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [color][piece_kind]
    pub(crate) pieces: [[u64; 6]; 2],

    // Occupancy caches, refreshed after every placement change.
    pub(crate) occupancy_by_color: [u64; 2],
    pub(crate) occupancy_all: u64,

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, kind) in (0u8..).zip(back_rank) {
            for (color, piece_rank, pawn_rank) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
                if let (Some(piece_sq), Some(pawn_sq)) =
                    (Square::new(file, piece_rank), Square::new(file, pawn_rank))
                {
                    board.put_piece(Piece::new(color, kind), piece_sq);
                    board.put_piece(Piece::new(color, PieceKind::Pawn), pawn_sq);
                }
            }
        }
        board.castling_rights = CASTLE_ALL;
        board.recalc_occupancy();
        debug_assert_eq!(board.to_fen(), STARTING_POSITION_FEN);
        board
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square.bit();
        if self.occupancy_all & mask == 0 {
            return None;
        }
        for color in Color::BOTH {
            if self.occupancy_by_color[color.index()] & mask == 0 {
                continue;
            }
            for kind in PieceKind::ALL {
                if self.pieces[color.index()][kind.index()] & mask != 0 {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    /// Pieces of `kind` for both colors.
    #[inline]
    pub fn pieces_of_kind(&self, kind: PieceKind) -> u64 {
        self.pieces[0][kind.index()] | self.pieces[1][kind.index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.occupancy_all
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.pieces_of(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Square::from_index(kings.trailing_zeros() as u8)
        }
    }

    /// Place a piece without refreshing occupancy; callers finish with
    /// [`Board::recalc_occupancy`].
    #[inline]
    pub(crate) fn put_piece(&mut self, piece: Piece, square: Square) {
        self.pieces[piece.color.index()][piece.kind.index()] |= square.bit();
    }

    pub(crate) fn recalc_occupancy(&mut self) {
        for color in Color::BOTH {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[0] | self.occupancy_by_color[1];
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let board = Board::new_game();
        assert_eq!(board.to_fen(), STARTING_POSITION_FEN);
        assert_eq!(board, Board::from_fen(STARTING_POSITION_FEN).expect("start FEN parses"));
        assert_eq!(board.occupied().count_ones(), 32);
    }

    #[test]
    fn piece_lookup_reads_both_colors() {
        let board = Board::new_game();
        assert_eq!(
            board.piece_at(Square::E1),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square::D8),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        let e4 = "e4".parse::<Square>().expect("e4 parses");
        assert_eq!(board.piece_at(e4), None);
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
    }
}
