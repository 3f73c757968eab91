//! FEN placement parser.
//!
//! Accepts the piece-placement field of Forsyth-Edwards Notation, optionally
//! followed by the side to move (`w` or `b`, White when absent). Any further
//! fields are ignored: castling, en passant and clocks have no meaning here.
//! The first rank listed in the string is row 0 of the board.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{
    chess_types::{Color, PieceKind, Square},
    game_state::GameState,
};

pub fn parse_fen(fen: &str) -> ChessResult<(GameState, Color)> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::White,
    };

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;

    Ok((game_state, side))
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen(format!(
            "board layout must contain 8 ranks, got {}",
            ranks.len()
        )));
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut column = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) || column as u32 + empty_count > 8 {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                column += empty_count as u8;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;

            if column >= 8 {
                return Err(ChessError::InvalidFen(format!(
                    "rank {} has too many files",
                    row + 1
                )));
            }

            game_state.place(kind, color, Square::at(row as u8, column))?;
            column += 1;
        }

        if column != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                row + 1
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let (game_state, side) = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(side, Color::White);
        assert_eq!(game_state.pieces().len(), 32);
        assert!(game_state.is_consistent());
    }

    #[test]
    fn first_listed_rank_is_row_zero() {
        let (game_state, side) = parse_fen("k7/8/8/8/8/8/8/7K b").unwrap();
        assert_eq!(side, Color::Black);
        let (_, black_king) = game_state.piece_at(Square::at(0, 0)).unwrap();
        assert_eq!((black_king.kind, black_king.color), (PieceKind::King, Color::Black));
        let (_, white_king) = game_state.piece_at(Square::at(7, 7)).unwrap();
        assert_eq!(white_king.color, Color::White);
    }

    #[test]
    fn side_defaults_to_white_and_extra_fields_are_ignored() {
        assert_eq!(parse_fen("8/8/8/8/8/8/8/8").unwrap().1, Color::White);
        assert_eq!(parse_fen("8/8/8/8/8/8/8/8 b KQkq - 0 1").unwrap().1, Color::Black);
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        for bad in [
            "",
            "8/8/8/8/8/8/8",
            "9/8/8/8/8/8/8/8",
            "8/8/8/8/8/8/8/7",
            "8/8/8/8/8/8/8/ppppppppp",
            "8/8/8/8/8/8/8/7x",
            "8/8/8/8/8/8/8/8 x",
        ] {
            assert!(
                matches!(parse_fen(bad), Err(ChessError::InvalidFen(_))),
                "accepted {bad:?}"
            );
        }
    }
}
