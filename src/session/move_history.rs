//! Played moves, in order.

use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::utils::algebraic::to_chess_notation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub kind: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub gives_check: bool,
}

impl MoveRecord {
    /// `"Knight B1-C3"`, with `x` for captures and a trailing `+` for check.
    pub fn notation(&self) -> String {
        let separator = if self.captured.is_some() { 'x' } else { '-' };
        let check = if self.gives_check { "+" } else { "" };
        format!(
            "{} {}{}{}{}",
            self.kind.name(),
            to_chess_notation(self.from),
            separator,
            to_chess_notation(self.to),
            check
        )
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
