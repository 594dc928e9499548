//! Crate root module declarations for the minimax chess engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! scoring tables, search, engines and utility helpers) so the demo binary,
//! benches, and external tooling can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_history;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_flow;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_tracing;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod tables {
    pub mod positional_tables;
}

pub mod engines {
    pub mod engine_config;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod fen_parser;
    pub mod render_game_state;
}
