//! Crate root module declarations for the chess arbiter.
//!
//! The arbiter keeps one authoritative game: board model, legal move
//! generation, the game state machine with its terminal rules, and the
//! automated opponent policy. The stdio front-end is a thin transport over
//! `game::game_server::GameServer`.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position_key;
}

pub mod moves {
    pub mod attack_tables;
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_castling;
    pub mod legal_moves_pawn;
    pub mod legal_moves_pieces;
    pub mod move_resolver;
    pub mod perft;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod opponent_policy;
}

pub mod game {
    pub mod chess_game;
    pub mod game_config;
    pub mod game_server;
    pub mod snapshot;
}

pub mod frontend {
    pub mod stdio_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_board;
}
