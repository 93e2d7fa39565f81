//! The game state machine.
//!
//! `ChessGame` owns the live board, the repetition history and the last move
//! played. Every mutation goes through [`ChessGame::play`], which only ever
//! receives moves taken from the legal move list.

use log::{debug, info, log_enabled, Level};

use crate::chess_errors::{FenError, Rejection};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    is_insufficient_material, FIFTY_MOVE_HALFMOVES, FIVEFOLD_REPETITION, SEVENTY_FIVE_MOVE_HALFMOVES,
    THREEFOLD_REPETITION,
};
use crate::game_state::position_key::position_key;
use crate::game::snapshot::{GameSnapshot, Termination, Winner};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, legal_moves, GeneratedMove};
use crate::move_generation::move_resolver::{resolve, resolve_uci};
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    board: Board,
    // Key of every position reached, starting with the initial one.
    repetition_history: Vec<u64>,
    last_move: Option<Move>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::from_board(Board::new_game())
    }

    /// Starts a game from an arbitrary position. Earlier history is unknown,
    /// so repetition counting starts here.
    pub fn from_board(board: Board) -> Self {
        let repetition_history = vec![position_key(&board)];
        Self {
            board,
            repetition_history,
            last_move: None,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Board::from_fen(fen).map(Self::from_board)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn generated_moves(&self) -> Vec<GeneratedMove> {
        generate_legal_moves(&self.board)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board)
    }

    /// Occurrences of the current position in the history, itself included.
    pub fn repetition_count(&self) -> usize {
        let current = position_key(&self.board);
        self.repetition_history
            .iter()
            .filter(|&&key| key == current)
            .count()
    }

    pub fn is_check(&self) -> bool {
        is_king_in_check(&self.board, self.board.side_to_move())
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination_given(!self.legal_moves().is_empty())
    }

    fn termination_given(&self, has_legal_moves: bool) -> Option<Termination> {
        if !has_legal_moves {
            return Some(if self.is_check() {
                Termination::Checkmate
            } else {
                Termination::Stalemate
            });
        }
        if is_insufficient_material(&self.board) {
            return Some(Termination::InsufficientMaterial);
        }
        if self.board.halfmove_clock() >= SEVENTY_FIVE_MOVE_HALFMOVES {
            return Some(Termination::SeventyFiveMoveRule);
        }
        if self.repetition_count() >= FIVEFOLD_REPETITION {
            return Some(Termination::FivefoldRepetition);
        }
        None
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.termination().is_some()
    }

    /// A draw could be claimed under the fifty-move or threefold rule.
    pub fn draw_claimable(&self) -> bool {
        self.board.halfmove_clock() >= FIFTY_MOVE_HALFMOVES
            || self.repetition_count() >= THREEFOLD_REPETITION
    }

    /// Validates and plays a move described by square text.
    pub fn apply_player_move(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<&str>,
    ) -> Result<Move, Rejection> {
        self.ensure_in_progress()?;
        let mv = resolve(&self.board, from, to, promotion).inspect_err(|rejection| {
            debug!("rejected {from}{to}: {rejection}");
        })?;
        self.play(mv);
        Ok(mv)
    }

    /// Same as [`ChessGame::apply_player_move`] for a single UCI string.
    pub fn apply_uci_move(&mut self, uci: &str) -> Result<Move, Rejection> {
        self.ensure_in_progress()?;
        let mv = resolve_uci(&self.board, uci).inspect_err(|rejection| {
            debug!("rejected {uci}: {rejection}");
        })?;
        self.play(mv);
        Ok(mv)
    }

    fn ensure_in_progress(&self) -> Result<(), Rejection> {
        if self.is_game_over() {
            debug!("move refused, game already over");
            return Err(Rejection::GameAlreadyOver);
        }
        Ok(())
    }

    /// Plays `mv`, which must come from this position's legal move list.
    pub(crate) fn play(&mut self, mv: Move) {
        let mover = self.board.side_to_move();
        self.board.make_move(&mv);
        self.repetition_history.push(position_key(&self.board));
        self.last_move = Some(mv);
        info!("{} played {mv}", mover.name());

        if log_enabled!(Level::Info) {
            if let Some(termination) = self.termination() {
                info!("game over: {termination:?}");
            }
        }
    }

    pub fn status(&self) -> GameSnapshot {
        let has_legal_moves = !self.legal_moves().is_empty();
        let is_check = self.is_check();
        let termination = self.termination_given(has_legal_moves);

        let winner = termination.map(|termination| {
            if termination.is_draw() {
                Winner::Draw
            } else {
                Winner::from(self.board.side_to_move().opposite())
            }
        });

        GameSnapshot {
            fen: self.board.to_fen(),
            is_check,
            is_checkmate: termination == Some(Termination::Checkmate),
            is_stalemate: termination == Some(Termination::Stalemate),
            is_game_over: termination.is_some(),
            turn: self.board.side_to_move(),
            winner,
            termination,
            draw_claimable: self.draw_claimable(),
            last_move: self.last_move.map(|mv| mv.uci()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        info!("board reset to the starting position");
    }

    /// Distinct target squares of the legal moves starting on `from`, in
    /// ascending square order.
    pub fn legal_targets(&self, from: &str) -> Result<Vec<String>, Rejection> {
        let from = algebraic_to_square(from)?;
        let mut targets: Vec<_> = self
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        Ok(targets.into_iter().map(|square| square.to_string()).collect())
    }
}
