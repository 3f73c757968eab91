//! Attack and check inspection.
//!
//! All answers are recomputed from the position on every call; the cost is
//! one pseudo-legal generation per attacking piece. These routines run inside
//! the simulation loops of the check filter and the checkmate resolver, so
//! they dominate the engine's running time.

use crate::game_state::{
    chess_types::{Color, PieceId, PieceKind, Square},
    game_state::GameState,
};
use crate::move_generation::move_generator::generate_moves_into;
use crate::move_generation::moves_pawn::pawn_attack_squares;

#[inline]
pub fn king_square(state: &GameState, color: Color) -> Option<Square> {
    state.king(color).and_then(|id| state.piece(id).square())
}

/// True when `king_color`'s king stands on a square attacked by the other side.
/// A side without a king on the board is never in check.
#[inline]
pub fn is_king_in_check(state: &GameState, king_color: Color) -> bool {
    let Some(king_sq) = king_square(state, king_color) else {
        return false;
    };
    is_square_attacked(state, king_sq, king_color.opposite())
}

/// True if a piece of `attacker` could move onto `square`.
///
/// Pawns count only their capture diagonals.
pub fn is_square_attacked(state: &GameState, square: Square, attacker: Color) -> bool {
    let mut scratch = Vec::with_capacity(28);
    state
        .pieces()
        .active(attacker)
        .any(|(id, _)| attacks_square(state, id, square, &mut scratch))
}

/// Opposing pieces whose pseudo-legal moves reach `king_color`'s king.
pub fn checkers(state: &GameState, king_color: Color) -> Vec<PieceId> {
    let Some(king_sq) = king_square(state, king_color) else {
        return vec![];
    };
    let mut scratch = Vec::with_capacity(28);
    state
        .pieces()
        .active(king_color.opposite())
        .filter(|(id, _)| attacks_square(state, *id, king_sq, &mut scratch))
        .map(|(id, _)| id)
        .collect()
}

fn attacks_square(state: &GameState, id: PieceId, target: Square, scratch: &mut Vec<Square>) -> bool {
    let piece = state.piece(id);
    let Some(from) = piece.square() else {
        return false;
    };
    scratch.clear();
    if piece.kind == PieceKind::Pawn {
        pawn_attack_squares(state, piece.color, from, scratch);
    } else {
        generate_moves_into(state, id, scratch);
    }
    scratch.contains(&target)
}
