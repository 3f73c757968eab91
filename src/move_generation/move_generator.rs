//! Pseudo-legal move generation entry points.
//!
//! Dispatches on the piece kind to the per-piece generators. Everything here
//! is a pure function of the position: nothing is cached on the piece, and a
//! list produced before a board mutation must not be reused after it.

use crate::game_state::{
    chess_types::{Color, PieceId, PieceKind, Square},
    game_state::GameState,
};
use crate::move_generation::moves_king::generate_king_moves;
use crate::move_generation::moves_knight::generate_knight_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_sliding::{
    generate_sliding_moves, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// Pseudo-legal destinations of `id`. Pieces that are not on the board
/// produce an empty list.
pub fn generate_moves(state: &GameState, id: PieceId) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    generate_moves_into(state, id, &mut out);
    out
}

/// Appends the pseudo-legal destinations of `id` to `out`.
pub fn generate_moves_into(state: &GameState, id: PieceId, out: &mut Vec<Square>) {
    let piece = state.piece(id);
    let Some(from) = piece.square() else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(state, piece.color, from, out),
        PieceKind::Rook => generate_sliding_moves(state, piece.color, from, &ROOK_DIRECTIONS, out),
        PieceKind::Bishop => {
            generate_sliding_moves(state, piece.color, from, &BISHOP_DIRECTIONS, out)
        }
        PieceKind::Queen => {
            generate_sliding_moves(state, piece.color, from, &QUEEN_DIRECTIONS, out)
        }
        PieceKind::Knight => generate_knight_moves(state, piece.color, from, out),
        PieceKind::King => generate_king_moves(state, piece.color, from, out),
    }
}

/// Every pseudo-legal `(piece, destination)` pair for `color`.
pub fn generate_all_moves(state: &GameState, color: Color) -> Vec<(PieceId, Square)> {
    let mut all = Vec::with_capacity(64);
    let mut scratch = Vec::with_capacity(28);
    for (id, _) in state.pieces().active(color) {
        scratch.clear();
        generate_moves_into(state, id, &mut scratch);
        all.extend(scratch.iter().map(|to| (id, *to)));
    }
    all
}

/// Shared rule for fixed-offset movers (knight, king): each in-bounds target
/// that is not held by a friendly piece.
pub(crate) fn generate_step_moves(
    state: &GameState,
    color: Color,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for (d_row, d_column) in offsets {
        let Some(to) = from.offset(*d_row, *d_column) else {
            continue;
        };
        if state.color_at(to) != Some(color) {
            out.push(to);
        }
    }
}
