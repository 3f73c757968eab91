//! Errors used throughout the rules engine.
//!
//! Two families live here:
//! - `ChessError` covers position setup and notation parsing. Functions that
//!   can fail this way return `ChessResult<T>` and propagate with `?`.
//! - `Rejection` is the advisory outcome of a user action the session refused
//!   (wrong turn, illegal destination, ...). Rejections are never fatal: they
//!   travel inside `SelectOutcome`/`MoveOutcome` and the session state is left
//!   exactly as it was before the call.

use crate::game_state::chess_types::Square;

/// Result alias for setup and parsing operations.
pub type ChessResult<T> = Result<T, ChessError>;

/// Failures while building or describing a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Row/column pair outside `[0, 8)`.
    #[error("square ({row}, {column}) is off the board")]
    OutOfBounds { row: i8, column: i8 },

    /// Tried to place a piece on a cell that already holds one.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// Malformed FEN placement string.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Malformed square notation such as `"E9"`.
    #[error("invalid square notation: {0}")]
    InvalidAlgebraic(String),
}

/// Reasons the session refused a selection or a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("not your turn")]
    WrongTurn,

    #[error("empty or captured square")]
    EmptySquare,

    #[error("the selected piece has been captured")]
    CapturedPiece,

    #[error("not a legal destination")]
    InvalidDestination,

    #[error("destination is occupied by a friendly piece")]
    OccupiedByFriendly,

    #[error("the game is over")]
    GameOver,

    #[error("no piece is selected")]
    NoSelection,

    #[error("click is outside the board")]
    OutOfBounds,
}
