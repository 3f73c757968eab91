use crate::game_state::{
    chess_types::{Color, Square},
    game_state::GameState,
};
use crate::move_generation::move_generator::generate_step_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn generate_knight_moves(state: &GameState, color: Color, from: Square, out: &mut Vec<Square>) {
    generate_step_moves(state, color, from, &KNIGHT_OFFSETS, out);
}
