//! Seeded random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin random_match`
//! `cargo run --release --bin random_match -- 42 --board`
//!
//! The first numeric argument is the seed. `RUST_LOG=debug` shows every
//! selection; `DUEL_CHESS_FILTER=in-check` switches to the lenient policy.

use tracing_subscriber::EnvFilter;

use duel_chess::session::session_config::SessionConfig;
use duel_chess::utils::random_match::{play_random_match, MatchConfig};
use duel_chess::utils::render_game_state::render_game_state;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = args
        .iter()
        .find_map(|a| a.parse::<u64>().ok())
        .unwrap_or(1234);
    let show_board = args.iter().any(|a| a == "--board" || a == "-b");

    let config = MatchConfig {
        seed,
        session: match std::env::var_os("DUEL_CHESS_FILTER") {
            Some(_) => SessionConfig::from_env(),
            None => MatchConfig::default().session,
        },
        ..MatchConfig::default()
    };

    let result = play_random_match(&config);

    for (ply, notation) in result.played_moves.iter().enumerate() {
        if ply % 2 == 0 {
            print!("{:>3}. {notation:<18}", ply / 2 + 1);
        } else {
            println!("{notation}");
        }
    }
    if result.played_moves.len() % 2 == 1 {
        println!();
    }

    if show_board {
        println!("\n{}", render_game_state(result.final_session.state()));
    }

    let session = &result.final_session;
    println!(
        "outcome: {:?} after {} plies (material white={} black={})",
        result.outcome,
        result.plies,
        session.captured_material(duel_chess::game_state::chess_types::Color::White),
        session.captured_material(duel_chess::game_state::chess_types::Color::Black),
    );
}
