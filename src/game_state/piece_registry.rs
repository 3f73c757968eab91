use crate::game_state::{
    chess_types::{Color, PieceId, PieceKind},
    piece::Piece,
};

/// Owner of every piece in the game.
///
/// Pieces are appended once and never removed, so a `PieceId` stays valid for
/// the lifetime of the registry. Scans run in insertion order.
#[derive(Clone, Debug, Default)]
pub struct PieceRegistry {
    pieces: Vec<Piece>,
}

impl PieceRegistry {
    pub fn new() -> Self {
        PieceRegistry { pieces: Vec::new() }
    }

    pub fn add(&mut self, piece: Piece) -> PieceId {
        self.pieces.push(piece);
        PieceId(self.pieces.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    #[inline]
    pub fn get_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0]
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.pieces.iter().enumerate().map(|(i, p)| (PieceId(i), p))
    }

    /// Pieces of `color` currently standing on the board.
    pub fn active(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.iter()
            .filter(move |(_, p)| p.color == color && p.square().is_some())
    }

    /// The on-board king of `color`, if there is one.
    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.active(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(id, _)| id)
    }
}
