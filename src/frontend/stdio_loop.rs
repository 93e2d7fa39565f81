//! Line-oriented stdio front-end.
//!
//! Reads one command per line and answers each with a single JSON line, except
//! `board`, which prints the diagram as text. Bad input never ends the loop;
//! it is answered with `{"error": ...}`.

use std::io::{self, BufRead, Write};

use rand::RngCore;
use serde::Serialize;
use serde_json::json;

use crate::chess_errors::Rejection;
use crate::game::game_config::GameMode;
use crate::game::game_server::GameServer;
use crate::utils::render_board::render_board;

pub fn run_stdio_loop<R: RngCore>(server: &mut GameServer<R>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = handle_command(server, &line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

/// Runs one command line against `server`. Returns `true` on `quit`.
pub fn handle_command<R: RngCore>(
    server: &mut GameServer<R>,
    line: &str,
    out: &mut impl Write,
) -> io::Result<bool> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(false);
    }

    let mut parts = trimmed.split_whitespace();
    let cmd = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match cmd {
        "new" => {
            let mode = match args.first() {
                Some(text) => match text.parse::<GameMode>() {
                    Ok(mode) => mode,
                    Err(err) => return reply_error(out, &err.to_string()).map(|_| false),
                },
                None => server.config().mode,
            };
            let difficulty = match args.get(1) {
                Some(text) => match text.parse::<u8>() {
                    Ok(level) => level,
                    Err(_) => {
                        return reply_error(out, &format!("invalid difficulty: {text}")).map(|_| false)
                    }
                },
                None => server.config().opponent_difficulty,
            };
            let state = server.new_game(mode, difficulty);
            reply(out, &state)?;
        }
        "move" => {
            let result = match args.as_slice() {
                [uci] => server.submit_uci(uci),
                [from, to] => server.submit_move(from, to, None),
                [from, to, promotion] => server.submit_move(from, to, Some(*promotion)),
                _ => {
                    return reply_error(out, "usage: move <from> <to> [promotion] | move <uci>")
                        .map(|_| false)
                }
            };
            match result {
                Ok(state) => reply(out, &state)?,
                Err(rejection) => reply_rejection(out, &rejection)?,
            }
        }
        "state" => {
            reply(out, &server.current_state())?;
        }
        "targets" => match args.first() {
            Some(square) => match server.legal_targets(square) {
                Ok(targets) => reply(out, &targets)?,
                Err(rejection) => reply_rejection(out, &rejection)?,
            },
            None => reply_error(out, "usage: targets <square>")?,
        },
        "board" => {
            writeln!(out, "{}", render_board(server.game().board()))?;
        }
        "info" => {
            let config = server.config();
            reply(
                out,
                &json!({
                    "mode": config.mode,
                    "opponent_difficulty": config.opponent_difficulty,
                    "started_at": server.started_at().to_rfc3339(),
                    "fullmove_number": server.game().board().fullmove_number(),
                }),
            )?;
        }
        "quit" => {
            return Ok(true);
        }
        _ => {
            reply_error(out, &format!("unknown command: {cmd}"))?;
        }
    }

    Ok(false)
}

fn reply(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

fn reply_rejection(out: &mut impl Write, rejection: &Rejection) -> io::Result<()> {
    reply_error(out, rejection.reason())
}

fn reply_error(out: &mut impl Write, message: &str) -> io::Result<()> {
    reply(out, &json!({ "error": message }))
}
