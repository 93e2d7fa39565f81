//! Difficulty-0 opponent: a uniformly random legal move.

use log::trace;
use rand::prelude::IndexedRandom;
use rand::RngCore;

use crate::engines::engine_trait::Engine;
use crate::move_generation::legal_move_generator::GeneratedMove;
use crate::moves::chess_move::Move;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, legal: &[GeneratedMove], rng: &mut dyn RngCore) -> Option<Move> {
        let choice = legal.choose(rng)?.chess_move;
        trace!("random engine picked {choice} from {} moves", legal.len());
        Some(choice)
    }
}
