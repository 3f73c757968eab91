//! Checkmate resolution.
//!
//! Given a king in check, searches for any legal reply, trying in order:
//! 1. a king move (including capturing the checker),
//! 2. a capture of the lone checker by another piece,
//! 3. an interposition on the line of a sliding checker.
//!
//! The search stops at the first reply that survives simulation. Every
//! candidate is simulated through the guards in `simulation`, so no two
//! candidates are ever evaluated against a mutated position.

use tracing::{debug, trace};

use crate::game_state::{
    chess_types::{Color, PieceId, PieceKind, Square},
    game_state::GameState,
};
use crate::move_generation::attack_checks::{checkers, is_king_in_check, is_square_attacked};
use crate::move_generation::move_generator::generate_moves;
use crate::move_generation::moves_sliding::squares_between;
use crate::move_generation::simulation::{leaves_king_in_check, LiftedPiece};

/// How a checked side can get out of check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    KingMove { to: Square },
    CaptureChecker { by: PieceId, at: Square },
    Interpose { by: PieceId, at: Square },
}

/// True if `king_color` is in check and has no reply that removes it.
/// A king that is not in check is never mated.
pub fn is_checkmate(state: &mut GameState, king_color: Color) -> bool {
    if !is_king_in_check(state, king_color) {
        return false;
    }
    match find_escape(state, king_color) {
        Some(escape) => {
            debug!(color = %king_color, ?escape, "check can be answered");
            false
        }
        None => {
            debug!(color = %king_color, "checkmate");
            true
        }
    }
}

/// First reply found that leaves `king_color` out of check, if any.
pub fn find_escape(state: &mut GameState, king_color: Color) -> Option<Escape> {
    let king = state.king(king_color)?;
    let king_sq = state.piece(king).square()?;

    let attackers = checkers(state, king_color);
    let lone_checker = match attackers.as_slice() {
        [single] => Some(*single),
        _ => None,
    };
    trace!(count = attackers.len(), "checkers found");

    if let Some(to) = king_escape(state, king, king_color, lone_checker) {
        return Some(Escape::KingMove { to });
    }

    // Two checkers cannot both be captured or blocked by one move.
    let checker = lone_checker?;
    let checker_sq = state.piece(checker).square()?;

    if let Some(by) = ally_reaching(state, king_color, checker_sq) {
        return Some(Escape::CaptureChecker { by, at: checker_sq });
    }

    if state.piece(checker).kind.is_slider() {
        for at in squares_between(checker_sq, king_sq) {
            if let Some(by) = ally_reaching(state, king_color, at) {
                return Some(Escape::Interpose { by, at });
            }
        }
    }

    None
}

fn king_escape(
    state: &mut GameState,
    king: PieceId,
    king_color: Color,
    lone_checker: Option<PieceId>,
) -> Option<Square> {
    let attacker = king_color.opposite();
    let checker_sq = lone_checker.and_then(|id| state.piece(id).square());

    for to in generate_moves(state, king) {
        let covered = match lone_checker {
            Some(checker) if Some(to) == checker_sq => {
                defended_once_taken(state, checker, to, attacker)
            }
            _ => is_square_attacked(state, to, attacker),
        };
        if covered {
            continue;
        }
        if !leaves_king_in_check(state, king, to, king_color) {
            return Some(to);
        }
    }
    None
}

/// Is `square` still attacked by `attacker` once `checker` is taken off it?
fn defended_once_taken(
    state: &mut GameState,
    checker: PieceId,
    square: Square,
    attacker: Color,
) -> bool {
    let Some(lifted) = LiftedPiece::lift(state, checker) else {
        return true;
    };
    is_square_attacked(lifted.state(), square, attacker)
}

/// A non-king piece of `color` that can move to `target` without leaving its
/// king in check.
fn ally_reaching(state: &mut GameState, color: Color, target: Square) -> Option<PieceId> {
    let allies: Vec<PieceId> = state
        .pieces()
        .active(color)
        .filter(|(_, p)| p.kind != PieceKind::King)
        .map(|(id, _)| id)
        .collect();

    allies.into_iter().find(|id| {
        generate_moves(state, *id).contains(&target)
            && !leaves_king_in_check(state, *id, target, color)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::generate_all_moves;
    use crate::move_generation::simulation::SimulatedMove;

    fn position(pieces: &[(PieceKind, Color, u8, u8)]) -> GameState {
        let mut state = GameState::new_empty();
        for (kind, color, row, column) in pieces {
            state.place(*kind, *color, Square::at(*row, *column)).unwrap();
        }
        state
    }

    /// Every pseudo-legal reply of the mated side leaves its king in check.
    fn assert_no_escape(state: &mut GameState, color: Color) {
        for (id, to) in generate_all_moves(state, color) {
            let sim = SimulatedMove::apply(state, id, to).unwrap();
            assert!(is_king_in_check(sim.state(), color), "escape via {id:?} to {to}");
        }
    }

    #[test]
    fn back_rank_mate_with_queen_cover() {
        let mut state = position(&[
            (PieceKind::King, Color::White, 7, 4),
            (PieceKind::Rook, Color::Black, 7, 0),
            (PieceKind::Queen, Color::Black, 5, 4),
        ]);
        let before = state.board().clone();
        assert!(is_checkmate(&mut state, Color::White));
        assert_eq!(state.board(), &before);
        assert!(state.is_consistent());
        assert_no_escape(&mut state, Color::White);
    }

    #[test]
    fn queen_on_far_rank_leaves_diagonal_escapes() {
        let mut state = position(&[
            (PieceKind::King, Color::White, 7, 4),
            (PieceKind::Queen, Color::Black, 0, 4),
            (PieceKind::Rook, Color::Black, 7, 0),
        ]);
        assert!(is_king_in_check(&state, Color::White));
        assert!(!is_checkmate(&mut state, Color::White));
        assert!(matches!(
            find_escape(&mut state, Color::White),
            Some(Escape::KingMove { .. })
        ));
    }

    #[test]
    fn rook_can_capture_the_checking_queen() {
        let mut state = position(&[
            (PieceKind::King, Color::White, 7, 4),
            (PieceKind::Queen, Color::Black, 6, 4),
            (PieceKind::Rook, Color::Black, 0, 4),
            (PieceKind::Rook, Color::White, 6, 0),
        ]);
        // The queen is defended along the file, so the king cannot take it.
        assert_eq!(
            find_escape(&mut state, Color::White),
            Some(Escape::CaptureChecker {
                by: state.board().occupant(Square::at(6, 0)).unwrap(),
                at: Square::at(6, 4),
            })
        );
        assert!(!is_checkmate(&mut state, Color::White));
    }

    #[test]
    fn bishop_blocks_a_rook_check() {
        let mut state = position(&[
            (PieceKind::King, Color::White, 7, 4),
            (PieceKind::Pawn, Color::White, 6, 3),
            (PieceKind::Pawn, Color::White, 6, 4),
            (PieceKind::Pawn, Color::White, 6, 5),
            (PieceKind::Rook, Color::Black, 7, 0),
            (PieceKind::Bishop, Color::White, 5, 0),
            (PieceKind::King, Color::Black, 0, 7),
        ]);
        // The king is boxed in by its pawns; the bishop can drop back to (7,2).
        assert_eq!(
            find_escape(&mut state, Color::White),
            Some(Escape::Interpose {
                by: state.board().occupant(Square::at(5, 0)).unwrap(),
                at: Square::at(7, 2),
            })
        );
    }

    #[test]
    fn knight_check_cannot_be_blocked() {
        // Smothered king: own pieces box it in, the knight is untouchable.
        let (mut state, _) = GameState::from_fen("6rk/5Npp/8/8/8/8/8/6K1 b").unwrap();
        assert!(is_checkmate(&mut state, Color::Black));
        assert_no_escape(&mut state, Color::Black);
    }

    #[test]
    fn double_check_still_allows_king_moves() {
        let (mut state, _) = GameState::from_fen("4k3/8/3N4/8/8/8/8/4R1K1 b").unwrap();
        assert_eq!(checkers(&state, Color::Black).len(), 2);
        assert!(!is_checkmate(&mut state, Color::Black));

        // Same double check with the flight squares covered.
        let (mut state, _) = GameState::from_fen("3rkr2/3p1p2/3N4/8/8/8/8/4R1K1 b").unwrap();
        assert!(is_checkmate(&mut state, Color::Black));
        assert_no_escape(&mut state, Color::Black);
    }

    #[test]
    fn not_in_check_is_not_mate() {
        let mut state = GameState::new_game();
        assert!(!is_checkmate(&mut state, Color::White));
        assert!(find_escape(&mut state, Color::White).is_some());
    }
}
