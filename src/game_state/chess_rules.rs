//! Canonical chess-rule constants and material rules.
//!
//! Holds the starting position, the automatic draw thresholds, the capture
//! value scale used by the heuristic opponent, and the insufficient-material
//! table.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock at which the game ends automatically (75 moves per side).
pub const SEVENTY_FIVE_MOVE_HALFMOVES: u16 = 150;

/// Halfmove clock from which a fifty-move draw may be claimed.
pub const FIFTY_MOVE_HALFMOVES: u16 = 100;

/// Occurrences of one position that end the game automatically.
pub const FIVEFOLD_REPETITION: usize = 5;

/// Occurrences of one position from which a draw may be claimed.
pub const THREEFOLD_REPETITION: usize = 3;

pub const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;
pub const LIGHT_SQUARES: u64 = !DARK_SQUARES;

/// Rank index of a legal en-passant target when `side_to_move` is to move.
#[inline]
pub const fn en_passant_rank(side_to_move: Color) -> u8 {
    match side_to_move {
        Color::White => 5,
        Color::Black => 2,
    }
}

/// Material value of a captured piece for the heuristic opponent.
#[inline]
pub const fn capture_value(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Neither side can ever deliver mate with the material on the board.
pub fn is_insufficient_material(board: &Board) -> bool {
    Color::BOTH
        .into_iter()
        .all(|color| has_insufficient_material(board, color))
}

/// `color` alone cannot force or even stumble into a mate of the opponent.
pub fn has_insufficient_material(board: &Board, color: Color) -> bool {
    let ours = board.occupancy(color);
    let theirs = board.occupancy(color.opposite());

    let heavy_or_pawns = board.pieces_of_kind(PieceKind::Pawn)
        | board.pieces_of_kind(PieceKind::Rook)
        | board.pieces_of_kind(PieceKind::Queen);
    if ours & heavy_or_pawns != 0 {
        return false;
    }

    if ours & board.pieces_of_kind(PieceKind::Knight) != 0 {
        // A lone knight can only mate an opponent whose own pieces box the king in.
        let their_blockers = theirs
            & !board.pieces_of_kind(PieceKind::King)
            & !board.pieces_of_kind(PieceKind::Queen);
        return ours.count_ones() <= 2 && their_blockers == 0;
    }

    if ours & board.pieces_of_kind(PieceKind::Bishop) != 0 {
        let bishops = board.pieces_of_kind(PieceKind::Bishop);
        let same_color = bishops & DARK_SQUARES == 0 || bishops & LIGHT_SQUARES == 0;
        return same_color
            && board.pieces_of_kind(PieceKind::Pawn) == 0
            && board.pieces_of_kind(PieceKind::Knight) == 0;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insufficient(fen: &str) -> bool {
        is_insufficient_material(&Board::from_fen(fen).expect("FEN should parse"))
    }

    #[test]
    fn square_color_masks() {
        assert_ne!(DARK_SQUARES & Square::A1.bit(), 0);
        assert_ne!(LIGHT_SQUARES & Square::H1.bit(), 0);
        assert_ne!(DARK_SQUARES & Square::H8.bit(), 0);
        assert_eq!(DARK_SQUARES.count_ones(), 32);
    }

    #[test]
    fn bare_kings_and_single_minor_are_insufficient() {
        assert!(insufficient("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
        assert!(insufficient("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1"));
        assert!(insufficient("4k3/8/8/8/8/8/8/2B1K3 b - - 0 1"));
        assert!(insufficient("4k3/8/8/8/8/8/8/1N2K3 w - - 0 1"));
        assert!(insufficient("4kn2/8/8/8/8/8/8/4K3 b - - 0 1"));
    }

    #[test]
    fn same_colored_bishops_are_insufficient() {
        // c1 and f8 are both dark squares.
        assert!(insufficient("5b1k/8/8/8/8/8/8/2B1K3 w - - 0 1"));
        // c1 dark, c8 light.
        assert!(!insufficient("2b4k/8/8/8/8/8/8/2B1K3 w - - 0 1"));
    }

    #[test]
    fn mating_material_is_sufficient() {
        assert!(!insufficient("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"));
        assert!(!insufficient("4k3/8/8/8/8/8/8/R3K3 w - - 0 1"));
        assert!(!insufficient("4k3/8/8/8/8/8/8/1NB1K3 w - - 0 1"));
        assert!(!insufficient("4kn2/8/8/8/8/8/8/1N2K3 w - - 0 1"));
        assert!(!insufficient(STARTING_POSITION_FEN));
    }

    #[test]
    fn capture_scale() {
        assert_eq!(capture_value(PieceKind::Queen), 9);
        assert_eq!(capture_value(PieceKind::Rook), 5);
        assert_eq!(capture_value(PieceKind::Bishop), capture_value(PieceKind::Knight));
        assert_eq!(capture_value(PieceKind::King), 0);
    }
}
