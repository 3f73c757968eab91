//! Square-to-piece index.
//!
//! The board answers "what stands on this cell" in constant time. It owns no
//! pieces: cells hold `PieceId` handles into the registry.

use crate::game_state::chess_types::{PieceId, Square};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PieceId>; 8]; 8],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.cells[square.row() as usize][square.column() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// Writes a cell and returns what was there before.
    #[inline]
    pub fn set(&mut self, square: Square, occupant: Option<PieceId>) -> Option<PieceId> {
        std::mem::replace(
            &mut self.cells[square.row() as usize][square.column() as usize],
            occupant,
        )
    }

    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<PieceId> {
        self.set(square, None)
    }

    /// Occupied cells, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        Square::all().filter_map(move |sq| self.occupant(sq).map(|id| (sq, id)))
    }
}
