//! Engine abstraction for the automated opponent.
//!
//! Engines only pick among moves that are already known to be legal, so a
//! choice can never be rejected by the game. The random source is passed in
//! rather than owned, which keeps seeded games reproducible.

use rand::RngCore;

use crate::move_generation::legal_move_generator::GeneratedMove;
use crate::moves::chess_move::Move;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks one of `legal`, or `None` when there is nothing to play.
    fn choose_move(&mut self, legal: &[GeneratedMove], rng: &mut dyn RngCore) -> Option<Move>;
}
