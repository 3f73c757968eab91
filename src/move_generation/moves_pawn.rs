use crate::game_state::{
    chess_types::{Color, Square},
    game_state::GameState,
};

/// Pawn pushes and captures. No en passant or promotion.
///
/// The double step needs the start row and both the intermediate and the
/// target square empty.
pub fn generate_pawn_moves(state: &GameState, color: Color, from: Square, out: &mut Vec<Square>) {
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if state.board().is_empty(one) {
            out.push(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if state.board().is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_column in [-1, 1] {
        if let Some(to) = from.offset(forward, d_column) {
            if state.color_at(to) == Some(color.opposite()) {
                out.push(to);
            }
        }
    }
}

/// Squares a pawn could capture on, whatever currently stands there (except
/// its own side). Pushes are not attacks.
pub fn pawn_attack_squares(state: &GameState, color: Color, from: Square, out: &mut Vec<Square>) {
    for d_column in [-1, 1] {
        if let Some(to) = from.offset(color.forward(), d_column) {
            if state.color_at(to) != Some(color) {
                out.push(to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    fn moves_from(state: &GameState, color: Color, from: Square) -> Vec<Square> {
        let mut out = vec![];
        generate_pawn_moves(state, color, from, &mut out);
        out
    }

    #[test]
    fn double_step_needs_empty_target() {
        let mut state = GameState::new_empty();
        state.place(PieceKind::Pawn, Color::White, Square::at(6, 3)).unwrap();
        state.place(PieceKind::Pawn, Color::Black, Square::at(4, 3)).unwrap();

        let moves = moves_from(&state, Color::White, Square::at(6, 3));
        assert!(moves.contains(&Square::at(5, 3)));
        assert!(!moves.contains(&Square::at(4, 3)));
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut state = GameState::new_empty();
        state.place(PieceKind::Pawn, Color::Black, Square::at(1, 2)).unwrap();
        state.place(PieceKind::Knight, Color::White, Square::at(2, 2)).unwrap();
        assert!(moves_from(&state, Color::Black, Square::at(1, 2)).is_empty());
    }

    #[test]
    fn double_step_only_from_start_row() {
        let state = GameState::new_empty();
        assert_eq!(
            moves_from(&state, Color::Black, Square::at(1, 0)),
            vec![Square::at(2, 0), Square::at(3, 0)]
        );
        assert_eq!(moves_from(&state, Color::White, Square::at(5, 0)), vec![Square::at(4, 0)]);
    }

    #[test]
    fn captures_only_onto_enemies() {
        let mut state = GameState::new_empty();
        state.place(PieceKind::Pawn, Color::White, Square::at(4, 4)).unwrap();
        state.place(PieceKind::Rook, Color::Black, Square::at(3, 3)).unwrap();
        state.place(PieceKind::Rook, Color::White, Square::at(3, 5)).unwrap();

        let moves = moves_from(&state, Color::White, Square::at(4, 4));
        assert_eq!(moves, vec![Square::at(3, 4), Square::at(3, 3)]);

        let mut attacks = vec![];
        pawn_attack_squares(&state, Color::White, Square::at(4, 4), &mut attacks);
        assert_eq!(attacks, vec![Square::at(3, 3)]);
    }
}
