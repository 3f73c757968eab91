use crate::game_state::{
    chess_types::{Color, Square},
    game_state::GameState,
};
use crate::move_generation::move_generator::generate_step_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// One step in any direction. No castling.
pub fn generate_king_moves(state: &GameState, color: Color, from: Square, out: &mut Vec<Square>) {
    generate_step_moves(state, color, from, &KING_OFFSETS, out);
}
