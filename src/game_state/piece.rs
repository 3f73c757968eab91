use crate::game_state::chess_types::{Color, Location, PieceKind, Square};

/// A chess piece and its play state.
/// Pieces live in the `PieceRegistry` for the whole game; capture only
/// changes `location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// Kind of piece (pawn, knight, ...).
    pub kind: PieceKind,
    /// Owning side.
    pub color: Color,
    /// Board cell, or why the piece is not on one.
    pub location: Location,
    /// Set once the piece completes its first move.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            location: Location::OnBoard(square),
            has_moved: false,
        }
    }

    #[inline]
    pub fn square(&self) -> Option<Square> {
        self.location.square()
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.location == Location::Captured
    }

    #[inline]
    pub fn point_value(&self) -> u32 {
        self.kind.point_value()
    }

    /// Human-readable name, e.g. `"Knight"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}
