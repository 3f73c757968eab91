//! Crate root module declarations for the Duel Chess rules engine.
//!
//! This file exposes the subsystems of the engine (position model, move
//! generation and check inspection, the interactive game session, and utility
//! helpers) so the rendering/input collaborator, binaries, benches and tests
//! can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece;
    pub mod piece_registry;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod check_filter;
    pub mod checkmate;
    pub mod move_generator;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_sliding;
    pub mod simulation;
}

pub mod session {
    pub mod game_session;
    pub mod move_history;
    pub mod outcomes;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod random_match;
    pub mod render_game_state;
}
