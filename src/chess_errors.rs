//! Errors used throughout the arbiter.
//!
//! `Rejection` is the only error a caller of the game API ever sees: every
//! variant is an expected outcome of user input and is recoverable. `FenError`
//! covers position parsing and `ConfigError` covers textual configuration.

use thiserror::Error;

/// Typed refusal of a request against the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Square text that does not name a board coordinate (e.g. "i9", "e").
    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    /// Well-formed request that is not in the legal move set, including
    /// moving the opponent's pieces and unmatched promotion letters.
    #[error("illegal move")]
    IllegalMove,

    /// Any move submitted after a terminal position has been reached.
    #[error("game already over")]
    GameAlreadyOver,
}

impl Rejection {
    /// Fixed reason string reported to the transport layer.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::InvalidCoordinate(_) => "invalid coordinate",
            Rejection::IllegalMove => "illegal move",
            Rejection::GameAlreadyOver => "game already over",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("missing {0} field in FEN")]
    MissingField(&'static str),
    #[error("FEN has extra trailing field: {0}")]
    TrailingField(String),
    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {0} of the board layout does not sum to 8 files")]
    RankWidth(usize),
    #[error("invalid piece character '{0}' in board layout")]
    PieceChar(char),
    #[error("invalid side-to-move field: {0}")]
    SideToMove(String),
    #[error("invalid castling rights character: {0}")]
    CastlingChar(char),
    #[error("invalid en-passant square: {0}")]
    EnPassant(String),
    #[error("invalid {field}: {value}")]
    Counter { field: &'static str, value: String },
    #[error("each side must have exactly one king")]
    KingCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown game mode: {0} (expected human_vs_human or human_vs_ai)")]
    UnknownMode(String),
}

#[cfg(test)]
mod tests {
    use super::Rejection;

    #[test]
    fn reasons_are_stable_strings() {
        assert_eq!(
            Rejection::InvalidCoordinate("z9".to_owned()).reason(),
            "invalid coordinate"
        );
        assert_eq!(Rejection::IllegalMove.reason(), "illegal move");
        assert_eq!(Rejection::GameAlreadyOver.reason(), "game already over");
        assert_eq!(Rejection::IllegalMove.to_string(), "illegal move");
    }
}
