//! Heuristic opponent for difficulty 1 and above.
//!
//! The ladder is strict: if any capture exists, play one of the captures with
//! the highest captured value; otherwise play a checking move if one exists;
//! otherwise play any legal move. Every tie is broken uniformly at random.

use log::trace;
use rand::prelude::IndexedRandom;
use rand::RngCore;

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_rules::capture_value;
use crate::move_generation::legal_move_generator::GeneratedMove;
use crate::moves::chess_move::Move;

#[derive(Debug, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Captures whose victim is worth the most.
    fn best_captures(legal: &[GeneratedMove]) -> Vec<&GeneratedMove> {
        let Some(best_value) = legal
            .iter()
            .filter_map(|mv| mv.chess_move.captured_piece)
            .map(capture_value)
            .max()
        else {
            return Vec::new();
        };

        legal
            .iter()
            .filter(|mv| mv.chess_move.captured_piece.map(capture_value) == Some(best_value))
            .collect()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(&mut self, legal: &[GeneratedMove], rng: &mut dyn RngCore) -> Option<Move> {
        let captures = Self::best_captures(legal);
        if let Some(mv) = captures.choose(rng) {
            trace!("greedy engine capture {} among {}", mv.chess_move, captures.len());
            return Some(mv.chess_move);
        }

        let checks: Vec<&GeneratedMove> = legal.iter().filter(|mv| mv.gives_check).collect();
        if let Some(mv) = checks.choose(rng) {
            trace!("greedy engine check {} among {}", mv.chess_move, checks.len());
            return Some(mv.chess_move);
        }

        let choice = legal.choose(rng)?.chess_move;
        trace!("greedy engine quiet move {choice}");
        Some(choice)
    }
}
