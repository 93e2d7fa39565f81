//! Move description.
//!
//! A `Move` is only meaningful against the board it was generated from: the
//! moved and captured pieces and the special-move marker are read off that
//! board at generation time so that applying the move needs no lookups.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecialMove {
    #[default]
    None,
    DoublePawnPush,
    EnPassant,
    Castling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved_piece: PieceKind,
    pub captured_piece: Option<PieceKind>,
    pub promotion_piece: Option<PieceKind>,
    pub special: SpecialMove,
}

impl Move {
    #[inline]
    pub fn new(from: Square, to: Square, moved_piece: PieceKind, captured_piece: Option<PieceKind>) -> Self {
        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            promotion_piece: None,
            special: SpecialMove::None,
        }
    }

    #[inline]
    pub fn with_promotion(mut self, promotion_piece: PieceKind) -> Self {
        self.promotion_piece = Some(promotion_piece);
        self
    }

    #[inline]
    pub fn with_special(mut self, special: SpecialMove) -> Self {
        self.special = special;
        self
    }

    /// Includes en-passant captures.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.special == SpecialMove::EnPassant
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.special == SpecialMove::Castling
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion_piece.is_some()
    }

    /// Lowercase UCI form, e.g. `e2e4` or `e7e8q`.
    pub fn uci(&self) -> String {
        move_to_long_algebraic(self.from, self.to, self.promotion_piece)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uci())
    }
}
