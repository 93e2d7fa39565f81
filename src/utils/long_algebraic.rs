//! Long algebraic (UCI) move text.
//!
//! Moves travel as four or five lowercase characters: source square, target
//! square and an optional promotion letter (`q`, `r`, `b`, `n`).

use crate::chess_errors::Rejection;
use crate::game_state::chess_types::{PieceKind, Square};

pub fn move_to_long_algebraic(from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&from.to_string());
    out.push_str(&to.to_string());
    if let Some(piece) = promotion {
        out.push(piece.letter());
    }
    out
}

/// Split `e2e4` / `e7e8q` into its source, target and promotion parts without
/// interpreting them.
pub fn split_long_algebraic(text: &str) -> Result<(&str, &str, Option<&str>), Rejection> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(Rejection::InvalidCoordinate(text.to_owned()));
    }
    let promotion = (text.len() == 5).then(|| &text[4..5]);
    Ok((&text[0..2], &text[2..4], promotion))
}

/// Promotion piece named by `text`; only knight, bishop, rook and queen
/// qualify. Case-insensitive.
pub fn promotion_from_text(text: &str) -> Option<PieceKind> {
    let mut chars = text.trim().chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return None;
    };
    PieceKind::from_letter(letter).filter(|kind| PieceKind::PROMOTIONS.contains(kind))
}
