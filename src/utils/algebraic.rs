//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`.
//! Parsing is the validation gate for every square that arrives as text, so
//! malformed input always comes back as a typed `InvalidCoordinate`.

use crate::chess_errors::Rejection;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
///
/// Surrounding whitespace is ignored and the file letter may be uppercase.
pub fn algebraic_to_square(text: &str) -> Result<Square, Rejection> {
    let invalid = || Rejection::InvalidCoordinate(text.to_owned());

    let bytes = text.trim().as_bytes();
    let [file, rank] = bytes else {
        return Err(invalid());
    };

    let file = file.to_ascii_lowercase();
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
        return Err(invalid());
    }

    Square::new(file - b'a', rank - b'1').ok_or_else(invalid)
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'1' + square.rank());
    format!("{file_char}{rank_char}")
}
