//! The single-game server consumed by transports.
//!
//! Wraps one `ChessGame` with its configuration and the random source used by
//! the automated opponent. Callers sharing a server between threads must hold
//! one lock around each call; every call completes synchronously.

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::chess_errors::Rejection;
use crate::engines::opponent_policy::select_move;
use crate::game::chess_game::ChessGame;
use crate::game::game_config::{GameConfig, GameMode};
use crate::game::snapshot::GameSnapshot;

#[derive(Debug)]
pub struct GameServer<R: RngCore = StdRng> {
    game: ChessGame,
    config: GameConfig,
    rng: R,
    started_at: DateTime<Utc>,
}

impl GameServer<StdRng> {
    /// Server whose opponent draws from operating-system entropy.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Server whose opponent replies are reproducible for a given seed.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> GameServer<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self::with_game(config, ChessGame::new(), rng)
    }

    /// Server continuing an existing game, e.g. one loaded from FEN.
    pub fn with_game(config: GameConfig, game: ChessGame, rng: R) -> Self {
        Self {
            game,
            config,
            rng,
            started_at: Utc::now(),
        }
    }

    /// Resets the board and switches to the given configuration.
    pub fn new_game(&mut self, mode: GameMode, opponent_difficulty: u8) -> GameSnapshot {
        self.game.reset();
        self.config = GameConfig::new(mode, opponent_difficulty);
        self.started_at = Utc::now();
        info!("new game: mode {mode}, difficulty {opponent_difficulty}");
        self.game.status()
    }

    /// Plays the human move and, when it is now the opponent's turn, one
    /// opponent reply.
    pub fn submit_move(
        &mut self,
        from: &str,
        to: &str,
        promotion: Option<&str>,
    ) -> Result<GameSnapshot, Rejection> {
        self.game.apply_player_move(from, to, promotion)?;
        self.opponent_reply();
        Ok(self.game.status())
    }

    /// [`GameServer::submit_move`] for a single UCI string.
    pub fn submit_uci(&mut self, uci: &str) -> Result<GameSnapshot, Rejection> {
        self.game.apply_uci_move(uci)?;
        self.opponent_reply();
        Ok(self.game.status())
    }

    fn opponent_reply(&mut self) {
        let Some(opponent) = self.config.opponent_color() else {
            return;
        };
        if self.game.board().side_to_move() != opponent || self.game.is_game_over() {
            return;
        }

        let legal = self.game.generated_moves();
        match select_move(&legal, self.config.opponent_difficulty, &mut self.rng) {
            Some(mv) => {
                debug!("opponent ({}) replies {mv}", opponent.name());
                self.game.play(mv);
            }
            None => debug!("opponent has no legal reply"),
        }
    }

    pub fn current_state(&self) -> GameSnapshot {
        self.game.status()
    }

    pub fn legal_targets(&self, from: &str) -> Result<Vec<String>, Rejection> {
        self.game.legal_targets(from)
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[inline]
    pub fn game(&self) -> &ChessGame {
        &self.game
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::GameServer;
    use crate::chess_errors::Rejection;
    use crate::game::chess_game::ChessGame;
    use crate::game::game_config::{GameConfig, GameMode};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Color;

    #[test]
    fn human_vs_human_waits_for_black() {
        let mut server = GameServer::seeded(GameConfig::default(), 1);
        let state = server.submit_move("e2", "e4", None).expect("legal");
        assert_eq!(state.turn, Color::Black);
        assert_eq!(state.last_move.as_deref(), Some("e2e4"));
    }

    #[test]
    fn ai_replies_immediately_as_black() {
        let mut server = GameServer::seeded(GameConfig::new(GameMode::HumanVsAi, 0), 5);
        let state = server.submit_move("e2", "e4", None).expect("legal");
        assert_eq!(state.turn, Color::White);
        let reply = state.last_move.expect("opponent moved");
        assert_ne!(reply, "e2e4");
        assert_eq!(server.game().board().fullmove_number(), 2);
    }

    #[test]
    fn same_seed_same_opponent() {
        let play = |seed| {
            let mut server = GameServer::seeded(GameConfig::new(GameMode::HumanVsAi, 0), seed);
            server.submit_move("d2", "d4", None).expect("legal").fen
        };
        assert_eq!(play(11), play(11));
    }

    #[test]
    fn greedy_opponent_takes_the_queen() {
        // After Qd1-d7?? black can take the queen with the king, knight or bishop.
        let game = ChessGame::from_fen("r1b1kbnr/ppppnppp/8/8/8/8/PPP2PPP/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        let config = GameConfig::new(GameMode::HumanVsAi, 1);
        let mut server = GameServer::with_game(config, game, StdRng::seed_from_u64(4));
        let state = server.submit_move("d1", "d7", None).expect("legal");
        let reply = state.last_move.expect("opponent moved");
        assert!(reply.ends_with("d7"), "expected a recapture on d7, got {reply}");
    }

    #[test]
    fn new_game_resets_and_reconfigures() {
        let mut server = GameServer::seeded(GameConfig::default(), 3);
        server.submit_move("e2", "e4", None).expect("legal");
        let state = server.new_game(GameMode::HumanVsAi, 2);
        assert_eq!(state.fen, STARTING_POSITION_FEN);
        assert_eq!(*server.config(), GameConfig::new(GameMode::HumanVsAi, 2));
        assert!(server.started_at() <= chrono::Utc::now());
    }

    #[test]
    fn rejections_leave_the_game_untouched() {
        let mut server = GameServer::seeded(GameConfig::new(GameMode::HumanVsAi, 1), 9);
        assert_eq!(server.submit_move("e2", "e5", None), Err(Rejection::IllegalMove));
        assert!(matches!(
            server.submit_move("e9", "e5", None),
            Err(Rejection::InvalidCoordinate(_))
        ));
        assert_eq!(server.current_state().fen, STARTING_POSITION_FEN);
        assert!(server.legal_targets("x").is_err());
    }
}
