//! Seeded random self-play through the public session API.
//!
//! Each ply picks the side to move's pieces in random order, selects them
//! until one offers a destination, and plays a random one of those. The same
//! seed always reproduces the same game.

use rand::{rngs::StdRng, seq::IndexedRandom, seq::SliceRandom, SeedableRng};
use tracing::{debug, info};

use crate::game_state::chess_types::{Color, PieceId, Square};
use crate::session::game_session::GameSession;
use crate::session::outcomes::{MoveOutcome, SelectOutcome};
use crate::session::session_config::{FilterPolicy, SessionConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    WhiteWinKingCapture,
    BlackWinKingCapture,
    /// The side to move had no destination on any piece.
    NoMovesAvailable,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub seed: u64,
    pub session: SessionConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
            session: SessionConfig {
                filter_policy: FilterPolicy::Always,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub plies: u16,
    pub played_moves: Vec<String>,
    pub final_session: GameSession,
}

/// Play one seeded random game from the standard starting position.
pub fn play_random_match(config: &MatchConfig) -> MatchResult {
    play_random_match_from(GameSession::with_config(config.session), config)
}

/// Play one seeded random game from an existing session.
pub fn play_random_match_from(mut session: GameSession, config: &MatchConfig) -> MatchResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut played_moves = Vec::new();
    let mut plies = 0u16;

    let outcome = loop {
        if plies >= config.max_plies {
            break MatchOutcome::DrawMaxPlies;
        }

        let turn = session.turn();
        let Some(to) = select_random_mover(&mut session, &mut rng) else {
            break MatchOutcome::NoMovesAvailable;
        };

        let result = session.attempt_move(to.row() as i8, to.column() as i8);
        if !result.is_rejected() {
            if let Some(record) = session.history().last() {
                played_moves.push(record.notation());
            }
            plies += 1;
        }

        match result {
            MoveOutcome::Moved { .. } => {}
            MoveOutcome::Checkmate { winner, .. } => break win_by_checkmate(winner),
            MoveOutcome::KingCaptured { winner, .. } => break win_by_king_capture(winner),
            MoveOutcome::Rejected(reason) => {
                debug!(%reason, color = %turn, "random move rejected");
                break MatchOutcome::NoMovesAvailable;
            }
        }
    };

    info!(
        seed = config.seed,
        plies,
        ?outcome,
        "random match finished"
    );

    MatchResult {
        outcome,
        plies,
        played_moves,
        final_session: session,
    }
}

/// Leaves a piece with at least one destination selected and returns the
/// destination chosen for it.
fn select_random_mover(session: &mut GameSession, rng: &mut StdRng) -> Option<Square> {
    let turn = session.turn();
    let mut movers: Vec<(PieceId, Square)> = session
        .state()
        .pieces()
        .active(turn)
        .filter_map(|(id, piece)| piece.square().map(|sq| (id, sq)))
        .collect();
    movers.shuffle(rng);

    for (_, square) in movers {
        let selected = session.select_at(square.row() as i8, square.column() as i8, turn);
        if !matches!(selected, SelectOutcome::Selected(_)) {
            continue;
        }
        let destinations = session.current_legal_destinations();
        if let Some(choice) = destinations.choose(rng) {
            return Some(choice.square);
        }
    }
    None
}

fn win_by_checkmate(winner: Color) -> MatchOutcome {
    match winner {
        Color::White => MatchOutcome::WhiteWinCheckmate,
        Color::Black => MatchOutcome::BlackWinCheckmate,
    }
}

fn win_by_king_capture(winner: Color) -> MatchOutcome {
    match winner {
        Color::White => MatchOutcome::WhiteWinKingCapture,
        Color::Black => MatchOutcome::BlackWinKingCapture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_replays_the_same_game() {
        let config = MatchConfig {
            max_plies: 60,
            seed: 7,
            ..MatchConfig::default()
        };
        let first = play_random_match(&config);
        let second = play_random_match(&config);
        assert_eq!(first.played_moves, second.played_moves);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn zero_ply_limit_plays_nothing() {
        let config = MatchConfig {
            max_plies: 0,
            ..MatchConfig::default()
        };
        let result = play_random_match(&config);
        assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
        assert!(result.played_moves.is_empty());
        assert_eq!(result.final_session.turn(), Color::White);
    }

    #[test]
    fn filtered_games_never_lose_a_king() {
        for seed in 0..6 {
            let config = MatchConfig {
                max_plies: 120,
                seed,
                ..MatchConfig::default()
            };
            let result = play_random_match(&config);
            assert!(!matches!(
                result.outcome,
                MatchOutcome::WhiteWinKingCapture | MatchOutcome::BlackWinKingCapture
            ));
            assert_eq!(result.plies as usize, result.played_moves.len());
            assert_eq!(result.final_session.history().len(), result.played_moves.len());
            assert!(result.final_session.state().is_consistent());

            let session = &result.final_session;
            for color in [Color::White, Color::Black] {
                assert!(session.state().king(color).is_some());
            }
            if matches!(
                result.outcome,
                MatchOutcome::WhiteWinCheckmate | MatchOutcome::BlackWinCheckmate
            ) {
                assert!(session.is_game_over());
                assert!(session.is_in_check(session.turn()));
            }
        }
    }

    #[test]
    fn stalemated_side_has_no_moves() {
        let session = GameSession::from_fen(
            "k7/8/1Q6/8/8/8/8/7K b",
            SessionConfig {
                filter_policy: FilterPolicy::Always,
            },
        )
        .unwrap();
        let result = play_random_match_from(session, &MatchConfig::default());
        assert_eq!(result.outcome, MatchOutcome::NoMovesAvailable);
        assert_eq!(result.plies, 0);
        assert!(!result.final_session.is_in_check(Color::Black));
    }
}
