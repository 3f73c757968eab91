//! Canonical chess-rule constants.
//!
//! Stores the standard starting arrangement used to initialize a new game.

use crate::game_state::chess_types::PieceKind;

/// Standard starting position as a FEN placement plus side to move.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Officers on the back rank, column 0 through 7.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
