//! Line-oriented request/response loop.
//!
//! Every request line yields exactly one response line on the output stream;
//! diagnostics go through `log`. Requests carry the full position, so the loop
//! holds no game state between lines and a failed request changes nothing.
//!
//! ```text
//! NEW_GAME [<fen>|DEFAULT]                          -> FEN: <fen>
//! MAKE_MOVE <fen> <move>                            -> FEN: <fen>
//! GET_ENGINE_MOVE <fen> [depth <n>] [movetime <ms>] -> MOVE: <move> FEN: <fen>
//! PERFT <depth> [<fen>]                             -> NODES: <count>
//! QUIT
//! ```
//! Failures answer `ERROR: <TAG> <message>`.

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::config::EngineConfig;
use crate::engines::engine_iterative::IterativeEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::PseudoLegalMoveGenerator;
use crate::move_generation::perft::perft;
use crate::utils::long_algebraic::{move_to_long_algebraic, parse_move};
use crate::utils::render_game_state::render_game_state;

pub const NO_MOVE: &str = "NOMOVE";

/// Deepest `PERFT` a request may ask for; the loop is single-threaded.
pub const MAX_PERFT_DEPTH: u8 = 6;

pub fn run_stdio_loop(config: EngineConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    CommandLoop::new(config).run(stdin.lock(), &mut stdout)
}

pub struct CommandLoop {
    engine: Box<dyn Engine>,
}

impl CommandLoop {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: Box::new(IterativeEngine::new(config)),
        }
    }

    /// Serves requests from `input` until `QUIT` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let should_quit = self.handle_command(&line, out)?;
            out.flush()?;
            if should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Handles one request line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default().to_ascii_uppercase();
        let args: Vec<&str> = parts.collect();
        info!("request {cmd} ({} args)", args.len());

        let response = match cmd.as_str() {
            "QUIT" => return Ok(true),
            "NEW_GAME" => self.handle_new_game(&args),
            "MAKE_MOVE" => self.handle_make_move(&args),
            "GET_ENGINE_MOVE" => self.handle_get_engine_move(&args),
            "PERFT" => self.handle_perft(&args),
            _ => Err(ChessError::UnknownCommand(cmd.clone())),
        };

        match response {
            Ok(line) => writeln!(out, "{line}")?,
            Err(err) => {
                warn!("rejected {cmd}: {err}");
                writeln!(out, "ERROR: {} {}", err.tag(), err)?;
            }
        }

        Ok(false)
    }

    fn handle_new_game(&mut self, args: &[&str]) -> ChessResult<String> {
        self.engine.new_game();
        let game_state = match args {
            [] => GameState::new_game(),
            [word] if word.eq_ignore_ascii_case("DEFAULT") => GameState::new_game(),
            fen => GameState::from_fen(&fen.join(" "))?,
        };
        Ok(format!("FEN: {}", game_state.get_fen()))
    }

    fn handle_make_move(&mut self, args: &[&str]) -> ChessResult<String> {
        let [fen @ .., move_text] = args else {
            return Err(ChessError::MissingArgument("MAKE_MOVE needs a position and a move".to_owned()));
        };
        if fen.is_empty() {
            return Err(ChessError::MissingArgument("MAKE_MOVE needs a position and a move".to_owned()));
        }

        let game_state = GameState::from_fen(&fen.join(" "))?;
        let mv = parse_move(move_text, &game_state)?;
        let next = game_state
            .apply_move(mv)
            .ok_or_else(|| ChessError::IllegalMove((*move_text).to_owned()))?;
        Ok(format!("FEN: {}", next.get_fen()))
    }

    fn handle_get_engine_move(&mut self, args: &[&str]) -> ChessResult<String> {
        let (fen, params) = split_search_limits(args)?;
        if fen.is_empty() {
            return Err(ChessError::MissingArgument("GET_ENGINE_MOVE needs a position".to_owned()));
        }

        let game_state = GameState::from_fen(&fen.join(" "))?;
        debug!("searching {:?}\n{}", params, render_game_state(&game_state));

        let output = self.engine.choose_move(&game_state, &params);
        for info_line in &output.info_lines {
            info!("{info_line}");
        }

        let next = output.best_move.and_then(|mv| {
            game_state
                .apply_move(mv)
                .map(|next| (move_to_long_algebraic(mv), next))
        });
        Ok(match next {
            Some((text, next)) => format!("MOVE: {text} FEN: {}", next.get_fen()),
            None => format!("MOVE: {NO_MOVE} FEN: {}", game_state.get_fen()),
        })
    }

    fn handle_perft(&mut self, args: &[&str]) -> ChessResult<String> {
        let [depth, fen @ ..] = args else {
            return Err(ChessError::MissingArgument("PERFT needs a depth".to_owned()));
        };
        let depth = parse_number::<u8>("depth", depth)?;
        if depth > MAX_PERFT_DEPTH {
            return Err(ChessError::InvalidArgument(format!(
                "perft depth {depth} exceeds the maximum of {MAX_PERFT_DEPTH}"
            )));
        }
        let game_state = if fen.is_empty() {
            GameState::new_game()
        } else {
            GameState::from_fen(&fen.join(" "))?
        };

        let counts = perft(&PseudoLegalMoveGenerator, &game_state, depth);
        Ok(format!("NODES: {}", counts.nodes))
    }
}

/// Strips trailing `depth <n>` / `movetime <ms>` pairs, in either order,
/// from a `GET_ENGINE_MOVE` argument list.
fn split_search_limits<'a, 'b>(args: &'a [&'b str]) -> ChessResult<(&'a [&'b str], GoParams)> {
    let mut params = GoParams::default();
    let mut rest = args;

    while let [head @ .., key, value] = rest {
        if key.eq_ignore_ascii_case("depth") && params.depth.is_none() {
            params.depth = Some(parse_number("depth", value)?);
        } else if key.eq_ignore_ascii_case("movetime") && params.movetime_ms.is_none() {
            params.movetime_ms = Some(parse_number("movetime", value)?);
        } else {
            break;
        }
        rest = head;
    }

    Ok((rest, params))
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> ChessResult<T> {
    raw.parse::<T>()
        .map_err(|_| ChessError::InvalidArgument(format!("{name} '{raw}' is not a valid number")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respond(line: &str) -> String {
        let mut out = Vec::new();
        let mut command_loop = CommandLoop::new(EngineConfig::default());
        let quit = command_loop
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        assert!(!quit);
        String::from_utf8(out).expect("responses are UTF-8")
    }

    #[test]
    fn search_limits_are_split_from_the_position() {
        let args = ["8/8/8/8/8/8/8/8", "w", "-", "-", "0", "1", "movetime", "50", "DEPTH", "3"];
        let (fen, params) = split_search_limits(&args).expect("valid limits");
        assert_eq!(fen.len(), 6);
        assert_eq!(params.depth, Some(3));
        assert_eq!(params.movetime_ms, Some(50));

        let bad = ["8/8/8/8/8/8/8/8", "depth", "deep"];
        assert!(matches!(split_search_limits(&bad), Err(ChessError::InvalidArgument(_))));
    }

    #[test]
    fn blank_lines_produce_no_output() {
        assert_eq!(respond("   "), "");
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(
            respond("new_game default"),
            "FEN: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1\n"
        );
    }

    #[test]
    fn missing_arguments_are_malformed() {
        assert!(respond("MAKE_MOVE e2e4").starts_with("ERROR: MALFORMED"));
        assert!(respond("PERFT").starts_with("ERROR: MALFORMED"));
        assert!(respond("GET_ENGINE_MOVE depth 2").starts_with("ERROR: MALFORMED"));
    }

    #[test]
    fn perft_depth_is_capped() {
        assert_eq!(
            respond("PERFT 200"),
            "ERROR: MALFORMED invalid argument: perft depth 200 exceeds the maximum of 6\n"
        );
        assert_eq!(respond("PERFT 0"), "NODES: 1\n");
    }

    #[test]
    fn quit_stops_the_loop_silently() {
        let mut out = Vec::new();
        let mut command_loop = CommandLoop::new(EngineConfig::default());
        assert!(command_loop.handle_command("quit", &mut out).expect("io"));
        assert!(out.is_empty());
    }
}
