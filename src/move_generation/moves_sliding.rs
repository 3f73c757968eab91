use crate::game_state::{
    chess_types::{Color, Square},
    game_state::GameState,
};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walks each direction until the edge or the first occupied square, which is
/// included only when it holds an enemy.
pub fn generate_sliding_moves(
    state: &GameState,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for (d_row, d_column) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(*d_row, *d_column) {
            match state.color_at(next) {
                None => out.push(next),
                Some(other) => {
                    if other != color {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

/// Unit step from `from` toward `to` when both share a rank, file or diagonal.
pub fn line_step(from: Square, to: Square) -> Option<(i8, i8)> {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_column = to.column() as i8 - from.column() as i8;
    if (d_row, d_column) == (0, 0) {
        return None;
    }
    if d_row == 0 || d_column == 0 || d_row.abs() == d_column.abs() {
        Some((d_row.signum(), d_column.signum()))
    } else {
        None
    }
}

/// Squares strictly between `from` and `to` on a shared line.
pub fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let mut out = vec![];
    let Some((d_row, d_column)) = line_step(from, to) else {
        return out;
    };
    let mut cursor = from;
    while let Some(next) = cursor.offset(d_row, d_column) {
        if next == to {
            break;
        }
        out.push(next);
        cursor = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn rook_stops_at_first_blocker() {
        let mut state = GameState::new_empty();
        state.place(PieceKind::Rook, Color::White, Square::at(7, 0)).unwrap();
        state.place(PieceKind::Pawn, Color::White, Square::at(5, 0)).unwrap();
        state.place(PieceKind::Knight, Color::Black, Square::at(7, 2)).unwrap();

        let mut out = vec![];
        generate_sliding_moves(&state, Color::White, Square::at(7, 0), &ROOK_DIRECTIONS, &mut out);
        assert_eq!(out, vec![Square::at(7, 1), Square::at(7, 2), Square::at(6, 0)]);
    }

    #[test]
    fn open_board_queen_reaches_twenty_seven_squares() {
        let state = GameState::new_empty();
        let mut out = vec![];
        generate_sliding_moves(&state, Color::Black, Square::at(3, 3), &QUEEN_DIRECTIONS, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn squares_between_follows_lines_only() {
        assert_eq!(
            squares_between(Square::at(7, 0), Square::at(7, 4)),
            vec![Square::at(7, 1), Square::at(7, 2), Square::at(7, 3)]
        );
        assert_eq!(
            squares_between(Square::at(0, 0), Square::at(3, 3)),
            vec![Square::at(1, 1), Square::at(2, 2)]
        );
        assert!(squares_between(Square::at(0, 0), Square::at(1, 2)).is_empty());
        assert!(squares_between(Square::at(6, 4), Square::at(7, 4)).is_empty());
    }
}
