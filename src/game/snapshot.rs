//! Read-only projection of a game for the transport layer.
//!
//! Snapshots are recomputed from the board on every request and serialize
//! straight to JSON.

use serde::Serialize;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

/// Why a game ended. Variants are listed in precedence order: when several
/// apply at once the first one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoveRule,
    FivefoldRepetition,
}

impl Termination {
    pub fn is_draw(self) -> bool {
        self != Termination::Checkmate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub fen: String,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub is_game_over: bool,
    pub turn: Color,
    pub winner: Option<Winner>,
    pub termination: Option<Termination>,
    /// A fifty-move or threefold-repetition draw could be claimed.
    pub draw_claimable: bool,
    pub last_move: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn snapshot_serializes_with_short_turn_and_lowercase_winner() {
        let snapshot = GameSnapshot {
            fen: STARTING_POSITION_FEN.to_owned(),
            is_check: false,
            is_checkmate: true,
            is_stalemate: false,
            is_game_over: true,
            turn: Color::Black,
            winner: Some(Winner::White),
            termination: Some(Termination::Checkmate),
            draw_claimable: false,
            last_move: Some("d8h4".to_owned()),
        };

        let value = serde_json::to_value(&snapshot).expect("serializable");
        assert_eq!(value["turn"], json!("b"));
        assert_eq!(value["winner"], json!("white"));
        assert_eq!(value["termination"], json!("checkmate"));
        assert_eq!(value["last_move"], json!("d8h4"));
    }

    #[test]
    fn draws_are_every_termination_but_mate() {
        assert!(!Termination::Checkmate.is_draw());
        assert!(Termination::FivefoldRepetition.is_draw());
        assert_eq!(
            serde_json::to_value(Termination::SeventyFiveMoveRule).expect("serializable"),
            json!("seventy_five_move_rule")
        );
        assert_eq!(Winner::from(Color::Black), Winner::Black);
    }
}
