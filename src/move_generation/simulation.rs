//! Simulate / inspect / restore.
//!
//! Hypothetical moves are applied in place and undone by `Drop`, so the
//! position is restored on every exit path, including early returns and
//! unwinding. While a guard is alive it holds the only borrow of the
//! `GameState`; nobody else can observe the uncommitted position.

use crate::game_state::{
    chess_types::{Color, Location, PieceId, Square},
    game_state::GameState,
};
use crate::move_generation::attack_checks::is_king_in_check;

/// A move applied provisionally to the position.
///
/// The mover's cell and location both follow the move. Whatever stood on the
/// destination is taken off the board as `Location::SimulatedOff` so neither
/// king lookup nor its own move generation can see it.
pub struct SimulatedMove<'a> {
    state: &'a mut GameState,
    mover: PieceId,
    from: Square,
    to: Square,
    displaced: Option<(PieceId, Location)>,
}

impl<'a> SimulatedMove<'a> {
    /// Applies the move, or returns `None` when the mover is not on the board.
    pub fn apply(state: &'a mut GameState, mover: PieceId, to: Square) -> Option<Self> {
        let from = state.piece(mover).square()?;

        let displaced = state.board.set(to, Some(mover)).map(|victim| {
            let piece = state.pieces.get_mut(victim);
            let previous = piece.location;
            piece.location = Location::SimulatedOff;
            (victim, previous)
        });
        state.board.clear(from);
        state.pieces.get_mut(mover).location = Location::OnBoard(to);

        Some(SimulatedMove {
            state,
            mover,
            from,
            to,
            displaced,
        })
    }

    /// Read-only view of the simulated position.
    #[inline]
    pub fn state(&self) -> &GameState {
        self.state
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.state.board.set(self.from, Some(self.mover));
        self.state.board.set(self.to, self.displaced.map(|(victim, _)| victim));
        self.state.pieces.get_mut(self.mover).location = Location::OnBoard(self.from);
        if let Some((victim, previous)) = self.displaced {
            self.state.pieces.get_mut(victim).location = previous;
        }
    }
}

/// A piece temporarily removed from the board without anything replacing it.
pub struct LiftedPiece<'a> {
    state: &'a mut GameState,
    piece: PieceId,
    square: Square,
}

impl<'a> LiftedPiece<'a> {
    pub fn lift(state: &'a mut GameState, piece: PieceId) -> Option<Self> {
        let square = state.piece(piece).square()?;
        state.board.clear(square);
        state.pieces.get_mut(piece).location = Location::SimulatedOff;
        Some(LiftedPiece {
            state,
            piece,
            square,
        })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        self.state
    }
}

impl Drop for LiftedPiece<'_> {
    fn drop(&mut self) {
        self.state.board.set(self.square, Some(self.piece));
        self.state.pieces.get_mut(self.piece).location = Location::OnBoard(self.square);
    }
}

/// Plays `mover` to `to` hypothetically and reports whether `king_color`'s
/// king is in check afterwards. The position is restored before returning.
pub fn leaves_king_in_check(
    state: &mut GameState,
    mover: PieceId,
    to: Square,
    king_color: Color,
) -> bool {
    if state.piece(mover).square().is_none() {
        return is_king_in_check(state, king_color);
    }
    SimulatedMove::apply(state, mover, to)
        .map(|simulated| is_king_in_check(simulated.state(), king_color))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    fn snapshot(state: &GameState) -> Vec<(Location, bool)> {
        state
            .pieces()
            .iter()
            .map(|(_, p)| (p.location, p.has_moved))
            .collect()
    }

    #[test]
    fn simulated_capture_is_fully_undone() {
        let (mut state, _) = GameState::from_fen("4k3/8/8/8/4q3/8/8/R3K3 w").unwrap();
        let before_board = state.board().clone();
        let before_pieces = snapshot(&state);
        let (rook, _) = state.piece_at(Square::at(7, 0)).unwrap();
        let (queen, _) = state.piece_at(Square::at(4, 4)).unwrap();

        {
            let sim = SimulatedMove::apply(&mut state, rook, Square::at(4, 0)).unwrap();
            assert_eq!(sim.state().board().occupant(Square::at(4, 0)), Some(rook));
        }
        {
            let (king, _) = state.piece_at(Square::at(7, 4)).unwrap();
            let sim = SimulatedMove::apply(&mut state, king, Square::at(6, 4)).unwrap();
            assert_eq!(sim.state().piece(queen).location, Location::OnBoard(Square::at(4, 4)));
            assert_eq!(
                sim.state().piece(king).location,
                Location::OnBoard(Square::at(6, 4))
            );
        }

        assert_eq!(state.board(), &before_board);
        assert_eq!(snapshot(&state), before_pieces);
        assert!(state.is_consistent());
    }

    #[test]
    fn captured_piece_is_invisible_during_simulation() {
        let mut state = GameState::new_empty();
        let king = state.place(PieceKind::King, Color::White, Square::at(7, 4)).unwrap();
        let queen = state.place(PieceKind::Queen, Color::Black, Square::at(6, 4)).unwrap();
        assert!(is_king_in_check(&state, Color::White));

        {
            let sim = SimulatedMove::apply(&mut state, king, Square::at(6, 4)).unwrap();
            assert_eq!(sim.state().piece(queen).location, Location::SimulatedOff);
            assert!(!is_king_in_check(sim.state(), Color::White));
        }
        assert_eq!(state.piece(queen).location, Location::OnBoard(Square::at(6, 4)));
        assert!(state.is_consistent());
    }

    #[test]
    fn lifted_piece_returns_to_its_cell() {
        let mut state = GameState::new_game();
        let (pawn, _) = state.piece_at(Square::at(6, 4)).unwrap();
        {
            let lifted = LiftedPiece::lift(&mut state, pawn).unwrap();
            assert!(lifted.state().board().is_empty(Square::at(6, 4)));
        }
        assert_eq!(state.board().occupant(Square::at(6, 4)), Some(pawn));
        assert!(state.is_consistent());
    }
}
