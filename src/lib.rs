//! Crate root module declarations for the magic-bitboard chess engine.
//!
//! Exposes the board model, magic attack tables, legal move generation,
//! alpha-beta search, the engine facade, the line protocol and the notation
//! helpers so the binary, integration tests and benchmarks share one set of
//! module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod bitboard;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod attack_tables;
    pub mod leaper_tables;
    pub mod magic;
    pub mod move_descriptions;
    pub mod sliding_rays;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_pieces;
    pub mod move_generator;
    pub mod move_ordering;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_trait;
}

pub mod protocol {
    pub mod command_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
