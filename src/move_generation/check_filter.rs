//! Self-check filtering.
//!
//! Narrows pseudo-legal destinations to those that do not leave the mover's
//! own king in check, by simulating each candidate on the live position.

use crate::game_state::{
    chess_types::{Color, PieceId, Square},
    game_state::GameState,
};
use crate::move_generation::move_generator::generate_moves;
use crate::move_generation::simulation::leaves_king_in_check;

/// Keeps the candidates after which `king_color`'s king is not in check.
///
/// Each candidate is simulated and rolled back before the next one, so the
/// position is unchanged when this returns. Candidate order is preserved.
pub fn filter_moves_to_avoid_check(
    state: &mut GameState,
    mover: PieceId,
    candidates: &[Square],
    king_color: Color,
) -> Vec<Square> {
    candidates
        .iter()
        .copied()
        .filter(|to| !leaves_king_in_check(state, mover, *to, king_color))
        .collect()
}

/// Pseudo-legal moves of `id` with every self-check removed.
pub fn legal_moves(state: &mut GameState, id: PieceId) -> Vec<Square> {
    let color = state.piece(id).color;
    let candidates = generate_moves(state, id);
    filter_moves_to_avoid_check(state, id, &candidates, color)
}
