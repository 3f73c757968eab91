//! Position model: piece registry plus the board index over it.
//!
//! `GameState` is the single owner of both structures and keeps them mutually
//! consistent: a cell holds a piece id iff that piece's location is that cell.
//! The only code allowed to break the invariant temporarily is the move
//! simulation guard in `move_generation::simulation`, which restores it before
//! the borrow ends.

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{
    board::Board,
    chess_rules::BACK_RANK,
    chess_types::{Color, Location, PieceId, PieceKind, Square},
    piece::Piece,
    piece_registry::PieceRegistry,
};
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) pieces: PieceRegistry,
}

impl GameState {
    /// Board with no pieces, for building test and puzzle positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial placement: White pawns, White officers, Black pawns,
    /// Black officers, each left to right.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        for color in [Color::White, Color::Black] {
            for column in 0..8 {
                state.spawn(
                    PieceKind::Pawn,
                    color,
                    Square::at(color.pawn_start_row(), column),
                );
            }
            for (column, kind) in BACK_RANK.iter().enumerate() {
                state.spawn(*kind, color, Square::at(color.back_row(), column as u8));
            }
        }
        state
    }

    /// Parses `<placement> [w|b]`; see `utils::fen_parser`.
    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<(Self, Color)> {
        parse_fen(fen)
    }

    /// Puts a new piece on an empty cell.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> ChessResult<PieceId> {
        if !self.board.is_empty(square) {
            return Err(ChessError::SquareOccupied(square));
        }
        Ok(self.spawn(kind, color, square))
    }

    fn spawn(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        let id = self.pieces.add(Piece::new(kind, color, square));
        self.board.set(square, Some(id));
        id
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn pieces(&self) -> &PieceRegistry {
        &self.pieces
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.pieces.get(id)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<(PieceId, &Piece)> {
        self.board.occupant(square).map(|id| (id, self.pieces.get(id)))
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|(_, p)| p.color)
    }

    #[inline]
    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.pieces.king(color)
    }

    /// Executes a move that has already been validated.
    ///
    /// An opposing occupant of `to` is marked captured and its cell cleared
    /// before the mover is relocated. Returns the captured piece, if any.
    pub(crate) fn commit_move(&mut self, mover: PieceId, to: Square) -> Option<PieceId> {
        let Some(from) = self.pieces.get(mover).square() else {
            return None;
        };

        let captured = self.board.clear(to);
        if let Some(victim) = captured {
            self.pieces.get_mut(victim).location = Location::Captured;
            debug!(victim = victim.index(), square = %to, "piece captured");
        }

        self.board.clear(from);
        self.board.set(to, Some(mover));
        let piece = self.pieces.get_mut(mover);
        piece.location = Location::OnBoard(to);
        piece.has_moved = true;

        captured
    }

    /// True when board cells and piece locations describe the same position.
    pub fn is_consistent(&self) -> bool {
        let cells_match = self
            .board
            .occupied()
            .all(|(sq, id)| self.pieces.get(id).location == Location::OnBoard(sq));
        let pieces_match = self.pieces.iter().all(|(id, piece)| match piece.location {
            Location::OnBoard(sq) => self.board.occupant(sq) == Some(id),
            Location::Captured => true,
            Location::SimulatedOff => false,
        });
        cells_match && pieces_match
    }
}
