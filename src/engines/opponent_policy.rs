//! Difficulty tiers for the automated opponent.
//!
//! Tier 0 plays uniformly at random; every higher tier uses the greedy
//! capture-then-check ladder.

use rand::RngCore;

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::move_generation::legal_move_generator::GeneratedMove;
use crate::moves::chess_move::Move;

pub fn engine_for_tier(tier: u8) -> Box<dyn Engine> {
    match tier {
        0 => Box::new(RandomEngine::new()),
        _ => Box::new(GreedyEngine::new()),
    }
}

/// Opponent choice among `legal` at difficulty `tier`.
pub fn select_move(legal: &[GeneratedMove], tier: u8, rng: &mut dyn RngCore) -> Option<Move> {
    engine_for_tier(tier).choose_move(legal, rng)
}
