//! Zobrist position keys for repetition tracking.
//!
//! The keys are generated from a fixed seed so hashes are deterministic across
//! runs. A key covers placement, side to move, castling rights and the
//! en-passant file, the latter only when a capture onto it is actually
//! available, so two positions that differ only in a dead en-passant target
//! repeat each other.

use std::sync::OnceLock;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::attack_tables::pawn_attacks;
use crate::moves::chess_move::{Move, SpecialMove};

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for key in piece_square.iter_mut().flatten().flatten() {
        *key = splitmix64(&mut seed);
    }

    let side_to_move = splitmix64(&mut seed);
    let castling = std::array::from_fn(|_| splitmix64(&mut seed));
    let en_passant_file = std::array::from_fn(|_| splitmix64(&mut seed));

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// En-passant target that the side to move can legally capture onto, if any.
/// A capture that would expose the capturer's own king does not count.
pub fn capturable_en_passant_square(board: &Board) -> Option<Square> {
    let target = board.en_passant_square()?;
    let us = board.side_to_move();
    // Our pawns attacking `target` are exactly the squares an enemy pawn on
    // `target` would attack.
    let capturers = pawn_attacks(us.opposite(), target) & board.pieces_of(us, PieceKind::Pawn);
    squares_of(capturers)
        .any(|from| {
            let capture = Move::new(from, target, PieceKind::Pawn, Some(PieceKind::Pawn))
                .with_special(SpecialMove::EnPassant);
            !is_king_in_check(&board.after_move(&capture), us)
        })
        .then_some(target)
}

/// Repetition key of the position on `board`.
pub fn position_key(board: &Board) -> u64 {
    let tables = tables();
    let mut key = 0u64;

    for color in Color::BOTH {
        for kind in PieceKind::ALL {
            for square in squares_of(board.pieces_of(color, kind)) {
                key ^= tables.piece_square[color.index()][kind.index()][square.index()];
            }
        }
    }

    if board.side_to_move() == Color::Black {
        key ^= tables.side_to_move;
    }

    key ^= tables.castling[(board.castling_rights() & CASTLE_ALL) as usize];

    if let Some(square) = capturable_en_passant_square(board) {
        key ^= tables.en_passant_file[square.file() as usize];
    }

    key
}
