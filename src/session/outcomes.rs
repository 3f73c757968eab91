//! Values handed back to the rendering and input layer.
//!
//! Everything here is a plain copyable snapshot: nothing borrows the session,
//! so a caller can keep an outcome around while it keeps playing.

use crate::errors::Rejection;
use crate::game_state::{
    chess_types::{Color, PieceId, PieceKind, Square},
    piece::Piece,
};

/// What the renderer needs to draw one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
}

impl PieceView {
    /// Snapshot of `piece` standing on `square`.
    pub(crate) fn new(id: PieceId, piece: &Piece, square: Square) -> Self {
        PieceView {
            id,
            kind: piece.kind,
            color: piece.color,
            square,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Renderer coordinates, see `Square::display_position`.
    #[inline]
    pub fn display_position(&self) -> (f32, f32) {
        self.square.display_position()
    }
}

/// One highlighted destination of the selected piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub square: Square,
    /// An opposing piece stands there.
    pub is_capture: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected(PieceView),
    Deselected,
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        from: Square,
        to: Square,
        captured: Option<PieceView>,
        /// The side now to move is in check.
        gives_check: bool,
    },
    Checkmate {
        winner: Color,
        from: Square,
        to: Square,
        captured: Option<PieceView>,
    },
    /// A king was taken. Only reachable when self-check filtering is off
    /// outside of check.
    KingCaptured {
        winner: Color,
        from: Square,
        to: Square,
        captured: PieceView,
    },
    Rejected(Rejection),
}

impl MoveOutcome {
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Result of `GameSession::click`, which may either select or move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Select(SelectOutcome),
    Move(MoveOutcome),
}
