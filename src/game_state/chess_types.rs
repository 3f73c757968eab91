//! Core value types shared by the position model, move generation and the
//! session: colors, piece kinds, squares and piece locations.

use std::fmt;

use crate::errors::{ChessError, ChessResult};

/// Side of a piece and side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step. Row 0 is Black's back rank.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the color's pawns start on.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row holding the color's king and officers at game start.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value used for captured-material tallies.
    #[inline]
    pub const fn point_value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 10,
        }
    }

    /// Rook, Bishop and Queen attack along lines and can be blocked.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A board cell. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Builds a square, rejecting coordinates outside `[0, 8)`.
    pub fn new(row: i8, column: i8) -> ChessResult<Self> {
        Self::checked(row, column).ok_or(ChessError::OutOfBounds { row, column })
    }

    /// Same as `new` for callers that only care whether the square exists.
    #[inline]
    pub fn checked(row: i8, column: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Self {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    /// Constructor for compile-time known squares. Coordinates are masked
    /// into range.
    #[inline]
    pub const fn at(row: u8, column: u8) -> Self {
        Self {
            row: row & 7,
            column: column & 7,
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// The square displaced by `(d_row, d_column)`, if it is still on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        Self::checked(self.row as i8 + d_row, self.column as i8 + d_column)
    }

    /// Renderer coordinates of the cell center in `[-1, 1]` space.
    #[inline]
    pub fn display_position(self) -> (f32, f32) {
        (
            -0.875 + self.column as f32 * 0.25,
            0.875 - self.row as f32 * 0.25,
        )
    }

    /// All 64 squares, row-major from Black's back rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square::at(i / 8, i % 8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Where a piece currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    OnBoard(Square),
    /// Taken during play; permanent.
    Captured,
    /// Lifted off the board for the duration of a move simulation.
    SimulatedOff,
}

impl Location {
    #[inline]
    pub fn square(self) -> Option<Square> {
        match self {
            Location::OnBoard(square) => Some(square),
            Location::Captured | Location::SimulatedOff => None,
        }
    }
}

/// Stable handle of a piece inside the `PieceRegistry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_bounds_are_enforced() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(-1, -1),
            Err(ChessError::OutOfBounds { row: -1, column: -1 })
        );
        assert!(Square::checked(8, 3).is_none());
        assert_eq!(Square::at(7, 0).offset(-1, 2), Some(Square::at(6, 2)));
        assert_eq!(Square::at(7, 0).offset(1, 0), None);
    }

    #[test]
    fn display_position_matches_cell_centers() {
        assert_eq!(Square::at(0, 0).display_position(), (-0.875, 0.875));
        assert_eq!(Square::at(7, 7).display_position(), (0.875, -0.875));
        assert_eq!(Square::at(7, 4).display_position(), (0.125, -0.875));
    }

    #[test]
    fn colors_point_their_pawns_at_each_other() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Square::all().count(), 64);
    }
}
