//! Square conversions for chess coordinates.
//!
//! Row 0 is rank 8 and column 0 is file A, so `Square::at(6, 4)` is `"E2"`.
//! The uppercase form is what the session reports to the player; the
//! lowercase form is accepted everywhere a coordinate is parsed.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Uppercase coordinate such as `"E2"`.
#[inline]
pub fn to_chess_notation(square: Square) -> String {
    let file = char::from(b'A' + square.column());
    let rank = char::from(b'8' - square.row());
    format!("{file}{rank}")
}

/// Lowercase coordinate such as `"e2"`.
#[inline]
pub fn to_algebraic(square: Square) -> String {
    to_chess_notation(square).to_ascii_lowercase()
}

/// Parses `"E2"` or `"e2"` back to a square.
pub fn from_chess_notation(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];

    if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    Ok(Square::at(b'8' - rank, file - b'A'))
}
