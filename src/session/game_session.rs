//! Interactive two-player game session.
//!
//! `GameSession` owns the position and drives the selection/move cycle the
//! front end feeds it with clicks:
//!
//! ```text
//! AwaitingSelection --select--> PieceSelected --move--> AwaitingSelection
//!        ^                          |  |                     |
//!        +-------- deselect --------+  +----- checkmate ---> GameOver
//! ```
//!
//! Every refused action comes back as a `Rejection` and leaves the session
//! exactly as it was.

use tracing::{debug, info, warn};

use crate::errors::{ChessResult, Rejection};
use crate::game_state::{
    chess_types::{Color, PieceId, PieceKind, Square},
    game_state::GameState,
};
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::check_filter::filter_moves_to_avoid_check;
use crate::move_generation::checkmate::is_checkmate;
use crate::move_generation::move_generator::generate_moves;
use crate::session::move_history::MoveRecord;
use crate::session::outcomes::{ClickOutcome, Destination, MoveOutcome, PieceView, SelectOutcome};
use crate::session::session_config::{FilterPolicy, SessionConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingSelection,
    PieceSelected,
    GameOver,
}

/// The selected piece and the destinations computed when it was selected.
#[derive(Debug, Clone)]
struct Selection {
    piece: PieceId,
    square: Square,
    destinations: Vec<Square>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    config: SessionConfig,
    turn: Color,
    selection: Option<Selection>,
    winner: Option<Color>,
    history: Vec<MoveRecord>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Standard starting position, White to move, default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self::from_state(GameState::new_game(), Color::White, config)
    }

    /// Session starting from a FEN placement; see `utils::fen_parser`.
    pub fn from_fen(fen: &str, config: SessionConfig) -> ChessResult<Self> {
        let (state, turn) = GameState::from_fen(fen)?;
        Ok(Self::from_state(state, turn, config))
    }

    fn from_state(state: GameState, turn: Color, config: SessionConfig) -> Self {
        GameSession {
            state,
            config,
            turn,
            selection: None,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Selects the piece on `(row, column)` for `requesting` or, if that piece
    /// is already selected, deselects it.
    pub fn select_at(&mut self, row: i8, column: i8, requesting: Color) -> SelectOutcome {
        if self.is_game_over() {
            return self.reject_selection(Rejection::GameOver);
        }
        let Some(square) = Square::checked(row, column) else {
            return self.reject_selection(Rejection::OutOfBounds);
        };
        if requesting != self.turn {
            return self.reject_selection(Rejection::WrongTurn);
        }
        if self.selection.as_ref().is_some_and(|s| s.square == square) {
            debug!(square = %square, "deselected");
            self.selection = None;
            return SelectOutcome::Deselected;
        }

        let (id, piece) = match self.state.piece_at(square) {
            None => return self.reject_selection(Rejection::EmptySquare),
            Some((_, piece)) if piece.color != self.turn => {
                return self.reject_selection(Rejection::WrongTurn)
            }
            Some((id, piece)) => (id, *piece),
        };

        let candidates = generate_moves(&self.state, id);
        let must_filter = match self.config.filter_policy {
            FilterPolicy::Always => true,
            FilterPolicy::WhenInCheck => is_king_in_check(&self.state, self.turn),
        };
        let destinations = if must_filter {
            filter_moves_to_avoid_check(&mut self.state, id, &candidates, self.turn)
        } else {
            candidates
        };

        debug!(
            piece = piece.name(),
            color = %piece.color,
            square = %square,
            filtered = must_filter,
            count = destinations.len(),
            "piece selected"
        );

        self.selection = Some(Selection {
            piece: id,
            square,
            destinations,
        });
        SelectOutcome::Selected(PieceView::new(id, &piece, square))
    }

    /// Moves the selected piece to `(row, column)`.
    pub fn attempt_move(&mut self, row: i8, column: i8) -> MoveOutcome {
        if self.is_game_over() {
            return self.reject_move(Rejection::GameOver);
        }
        let Some(selection) = self.selection.as_ref() else {
            return self.reject_move(Rejection::NoSelection);
        };
        let Some(to) = Square::checked(row, column) else {
            return self.reject_move(Rejection::OutOfBounds);
        };
        let mover = selection.piece;
        let Some(from) = self.state.piece(mover).square() else {
            return self.reject_move(Rejection::CapturedPiece);
        };
        if self.state.color_at(to) == Some(self.turn) {
            return self.reject_move(Rejection::OccupiedByFriendly);
        }
        if !selection.destinations.contains(&to) {
            return self.reject_move(Rejection::InvalidDestination);
        }

        let mover_color = self.turn;
        let kind = self.state.piece(mover).kind;
        let captured = self
            .state
            .commit_move(mover, to)
            .map(|victim| PieceView::new(victim, self.state.piece(victim), to));

        self.selection = None;
        self.turn = mover_color.opposite();
        let gives_check = is_king_in_check(&self.state, self.turn);

        let record = MoveRecord {
            kind,
            color: mover_color,
            from,
            to,
            captured: captured.map(|view| view.kind),
            gives_check,
        };
        info!(color = %mover_color, mv = %record, "move played");
        self.history.push(record);

        if let Some(king) = captured.filter(|view| view.kind == PieceKind::King) {
            info!(winner = %mover_color, "king captured");
            self.winner = Some(mover_color);
            return MoveOutcome::KingCaptured {
                winner: mover_color,
                from,
                to,
                captured: king,
            };
        }

        if gives_check {
            info!(color = %self.turn, "king in check");
            if is_checkmate(&mut self.state, self.turn) {
                info!(winner = %mover_color, "checkmate");
                self.winner = Some(mover_color);
                return MoveOutcome::Checkmate {
                    winner: mover_color,
                    from,
                    to,
                    captured,
                };
            }
        }

        MoveOutcome::Moved {
            from,
            to,
            captured,
            gives_check,
        }
    }

    /// Routes one board click: with a selection, its own square deselects
    /// and any other square is a move attempt; without one, the click selects
    /// for the side to move.
    pub fn click(&mut self, row: i8, column: i8) -> ClickOutcome {
        let on_selected = self.selection.as_ref().map(|s| {
            Square::checked(row, column) == Some(s.square)
        });
        match on_selected {
            Some(false) => ClickOutcome::Move(self.attempt_move(row, column)),
            Some(true) | None => ClickOutcome::Select(self.select_at(row, column, self.turn)),
        }
    }

    /// Destinations of the selected piece, empty when nothing is selected.
    pub fn current_legal_destinations(&self) -> Vec<Destination> {
        let Some(selection) = self.selection.as_ref() else {
            return Vec::new();
        };
        let opponent = self.turn.opposite();
        selection
            .destinations
            .iter()
            .map(|square| Destination {
                square: *square,
                is_capture: self.state.color_at(*square) == Some(opponent),
            })
            .collect()
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.state, color)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_game_over() {
            SessionPhase::GameOver
        } else if self.selection.is_some() {
            SessionPhase::PieceSelected
        } else {
            SessionPhase::AwaitingSelection
        }
    }

    /// The selected piece, if any.
    pub fn selected(&self) -> Option<PieceView> {
        let selection = self.selection.as_ref()?;
        Some(PieceView::new(
            selection.piece,
            self.state.piece(selection.piece),
            selection.square,
        ))
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Point value of the opposing pieces `color` has captured.
    pub fn captured_material(&self, color: Color) -> u32 {
        self.state
            .pieces()
            .iter()
            .filter(|(_, p)| p.color == color.opposite() && p.is_captured())
            .map(|(_, p)| p.point_value())
            .sum()
    }

    fn reject_selection(&self, reason: Rejection) -> SelectOutcome {
        warn!(%reason, turn = %self.turn, "selection rejected");
        SelectOutcome::Rejected(reason)
    }

    fn reject_move(&self, reason: Rejection) -> MoveOutcome {
        warn!(%reason, turn = %self.turn, "move rejected");
        MoveOutcome::Rejected(reason)
    }
}
