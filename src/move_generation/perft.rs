//! Perft: exhaustive legal-move tree counting for generator validation.

use std::thread;

use crate::game_state::board::Board;
use crate::move_generation::legal_move_generator::{generate_legal_moves, GeneratedMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &GeneratedMove) {
        self.nodes += 1;
        let chess_move = &mv.chess_move;
        if chess_move.is_capture() {
            self.captures += 1;
        }
        if chess_move.is_en_passant() {
            self.en_passant += 1;
        }
        if chess_move.is_castling() {
            self.castles += 1;
        }
        if chess_move.is_promotion() {
            self.promotions += 1;
        }
        if mv.gives_check {
            self.checks += 1;
            if generate_legal_moves(&mv.board_after).is_empty() {
                self.checkmates += 1;
            }
        }
    }
}

pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(board) {
        perft_recurse(&mv, depth, 1, &mut total);
    }
    total
}

/// Same counts as [`perft`], one scoped worker thread per root move.
pub fn perft_multi_threaded(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(board, depth);
    }

    let root_moves = generate_legal_moves(board);
    let mut total = PerftCounts::default();

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(mv, depth, 1, &mut local);
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });

    total
}

fn perft_recurse(mv: &GeneratedMove, search_depth: u8, current_depth: u8, counts: &mut PerftCounts) {
    if current_depth == search_depth {
        counts.record_leaf(mv);
        return;
    }

    for child in generate_legal_moves(&mv.board_after) {
        perft_recurse(&child, search_depth, current_depth + 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        assert_eq!(
            perft(&Board::new_game(), 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_perft() {
        let start = Board::new_game();
        assert_eq!(perft(&start, 1).nodes, 20);
        assert_eq!(perft(&start, 2).nodes, 400);

        let depth_three = perft(&start, 3);
        assert_eq!(depth_three.nodes, 8_902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);
    }

    #[test]
    fn kiwipete_perft_covers_castling_and_en_passant() {
        let position = board(KIWIPETE);
        let depth_one = perft(&position, 1);
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        assert_eq!(
            perft(&position, 2),
            PerftCounts {
                nodes: 2_039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn endgame_perft_with_pins_and_en_passant() {
        let counts = perft(&board(POSITION_3), 3);
        assert_eq!(counts.nodes, 2_812);
        assert_eq!(counts.captures, 209);
        assert_eq!(counts.en_passant, 2);
        assert_eq!(counts.checks, 267);
    }

    #[test]
    fn threaded_perft_matches_single_thread() {
        let position = board(KIWIPETE);
        assert_eq!(perft_multi_threaded(&position, 2), perft(&position, 2));
    }
}
