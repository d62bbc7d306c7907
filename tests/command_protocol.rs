use std::io::Cursor;

use magic_chess::config::EngineConfig;
use magic_chess::protocol::command_loop::CommandLoop;

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn run_session(script: &str) -> Vec<String> {
    let mut out = Vec::new();
    CommandLoop::new(EngineConfig::default())
        .run(Cursor::new(script.as_bytes()), &mut out)
        .expect("in-memory session should not fail");
    String::from_utf8(out)
        .expect("responses are UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

fn respond(line: &str) -> String {
    let mut lines = run_session(line);
    assert_eq!(lines.len(), 1, "expected exactly one response to {line:?}");
    lines.remove(0)
}

#[test]
fn new_game_reports_the_starting_position() {
    assert_eq!(respond("NEW_GAME"), format!("FEN: {STARTPOS_FEN}"));
    assert_eq!(respond("NEW_GAME DEFAULT"), format!("FEN: {STARTPOS_FEN}"));
}

#[test]
fn new_game_fills_in_missing_fen_fields() {
    assert_eq!(
        respond("NEW_GAME 4k3/8/8/8/8/8/8/4K3 w"),
        "FEN: 4k3/8/8/8/8/8/8/4K3 w - - 0 1"
    );
}

#[test]
fn make_move_returns_the_next_position() {
    assert_eq!(
        respond(&format!("MAKE_MOVE {STARTPOS_FEN} e2e4")),
        "FEN: rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn rejected_moves_are_tagged_by_cause() {
    assert_eq!(
        respond(&format!("MAKE_MOVE {STARTPOS_FEN} e2e5")),
        "ERROR: ILLEGAL_MOVE illegal move 'e2e5'"
    );
    assert!(respond(&format!("MAKE_MOVE {STARTPOS_FEN} e2")).starts_with("ERROR: MALFORMED"));
    assert!(respond("MAKE_MOVE rnbqkbnr/ppp w e2e4").starts_with("ERROR: MALFORMED"));
}

#[test]
fn positions_with_the_idle_king_in_check_are_rejected() {
    let fen = "4k3/8/8/8/8/8/8/4RK2 w - - 0 1";
    assert!(respond(&format!("NEW_GAME {fen}")).starts_with("ERROR: MALFORMED"));
    assert!(respond(&format!("MAKE_MOVE {fen} e1e8")).starts_with("ERROR: MALFORMED"));
}

#[test]
fn en_passant_square_without_a_pushed_pawn_is_rejected() {
    assert!(respond("MAKE_MOVE 4k3/8/8/3Pn3/8/8/8/4K3 w - e6 0 1 d5e6").starts_with("ERROR: MALFORMED"));
}

#[test]
fn unknown_commands_are_reported() {
    assert_eq!(respond("FOO bar"), "ERROR: UNKNOWN_COMMAND unknown command 'FOO'");
}

#[test]
fn engine_finds_mate_in_one() {
    assert_eq!(
        respond("GET_ENGINE_MOVE k7/8/1K6/8/8/8/8/7R w - - 0 1 depth 3"),
        "MOVE: h1h8 FEN: k6R/8/1K6/8/8/8/8/8 b - - 1 1"
    );
}

#[test]
fn engine_reports_no_move_when_mated() {
    assert_eq!(
        respond("GET_ENGINE_MOVE 6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1"),
        "MOVE: NOMOVE FEN: 6k1/6Q1/6K1/8/8/8/8/8 b - - 0 1"
    );
}

#[test]
fn engine_move_agrees_with_make_move() {
    let reply = respond(&format!("GET_ENGINE_MOVE {STARTPOS_FEN} depth 2 movetime 2000"));
    let rest = reply.strip_prefix("MOVE: ").expect("engine reply");
    let (move_text, fen) = rest.split_once(" FEN: ").expect("reply carries a FEN");

    assert_eq!(
        respond(&format!("MAKE_MOVE {STARTPOS_FEN} {move_text}")),
        format!("FEN: {fen}")
    );
}

#[test]
fn perft_counts_leaf_nodes() {
    assert_eq!(respond("PERFT 3"), "NODES: 8902");
    assert_eq!(
        respond("PERFT 2 r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
        "NODES: 2039"
    );
    assert!(respond("PERFT two").starts_with("ERROR: MALFORMED"));
    assert!(respond("PERFT 200").starts_with("ERROR: MALFORMED"));
}

#[test]
fn session_stops_at_quit_and_skips_blank_lines() {
    let lines = run_session("NEW_GAME\n\n   \nPERFT 1\nQUIT\nPERFT 2\n");
    assert_eq!(lines, vec![format!("FEN: {STARTPOS_FEN}"), "NODES: 20".to_owned()]);
}

#[test]
fn errors_do_not_end_the_session() {
    let lines = run_session("BOGUS\nPERFT 1\n");
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ERROR: UNKNOWN_COMMAND"));
    assert_eq!(lines[1], "NODES: 20");
}
