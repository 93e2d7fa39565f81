//! `chess_arbiter` binary: one game served over stdin/stdout.

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use chess_arbiter::frontend::stdio_loop::run_stdio_loop;
use chess_arbiter::game::game_config::{GameConfig, GameMode};
use chess_arbiter::game::game_server::GameServer;

#[derive(Parser, Debug)]
#[command(
    name = "chess_arbiter",
    about = "Single-game chess server speaking line commands on stdin and JSON on stdout"
)]
struct Args {
    /// human_vs_human or human_vs_ai
    #[arg(long, default_value = "human_vs_human")]
    mode: GameMode,

    /// Opponent tier: 0 random, 1+ capture/check heuristic
    #[arg(long, default_value_t = 0)]
    difficulty: u8,

    /// Seed for reproducible opponent moves
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = GameConfig::new(args.mode, args.difficulty);
    info!("starting {} game, difficulty {}", config.mode, config.opponent_difficulty);

    let mut server = match args.seed {
        Some(seed) => GameServer::seeded(config, seed),
        None => GameServer::new(config),
    };

    match run_stdio_loop(&mut server) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("stdio loop failed: {err}");
            ExitCode::FAILURE
        }
    }
}
