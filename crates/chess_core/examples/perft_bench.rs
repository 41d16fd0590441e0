//! Perft divide over castling-free positions, for profiling move legality.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!   cargo flamegraph --example perft_bench -p chess_core -- 4
//!
//! With a FEN, prints the node count below every root move; without one,
//! runs the built-in positions and prints one total per position.

use std::env;
use std::time::{Duration, Instant};

use chess_core::{GameState, perft_divide};

/// Positions whose counts are unaffected by the missing castling rule.
const POSITIONS: &[(&str, &str)] = &[
    ("start", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"),
    ("start, black to move", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b - - 0 1"),
    ("rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    ("en passant open", "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w - f6 0 3"),
    ("promotion race", "8/P6k/8/8/8/8/6Kp/8 w - - 0 1"),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    match args.get(2) {
        Some(fen) => divide_one(fen, depth),
        None => run_suite(depth),
    }
}

fn timed_divide(state: &mut GameState, depth: u8) -> (Vec<(String, u64)>, Duration) {
    let start = Instant::now();
    let mut split: Vec<(String, u64)> = perft_divide(state, depth)
        .into_iter()
        .map(|(mv, nodes)| (mv.to_string(), nodes))
        .collect();
    let elapsed = start.elapsed();
    split.sort();
    (split, elapsed)
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}

fn divide_one(fen: &str, depth: u8) {
    let mut state = match GameState::from_fen(fen) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("invalid FEN: {err}");
            std::process::exit(2);
        }
    };

    let (split, elapsed) = timed_divide(&mut state, depth);
    for (mv, nodes) in &split {
        println!("{mv:<6} {nodes}");
    }
    let total: u64 = split.iter().map(|(_, n)| n).sum();
    println!();
    println!("moves {}  nodes {total}  depth {depth}", split.len());
    println!("{elapsed:.3?} ({:.0} nps)", nps(total, elapsed));
}

fn run_suite(depth: u8) {
    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in POSITIONS {
        let Ok(mut state) = GameState::from_fen(fen) else {
            println!("{name:.<28} invalid FEN");
            continue;
        };
        let (split, elapsed) = timed_divide(&mut state, depth);
        let nodes: u64 = split.iter().map(|(_, n)| n).sum();
        total_nodes += nodes;
        total_time += elapsed;

        // widest subtree, the usual first place to look when a count is off
        let widest = split.iter().max_by_key(|(_, n)| *n);
        let widest = widest.map(|(mv, n)| format!("{mv} {n}")).unwrap_or_default();
        println!(
            "{name:.<28} {:>3} roots {nodes:>10} nodes {elapsed:>9.3?}  widest {widest}",
            split.len()
        );
    }

    println!();
    println!(
        "depth {depth}: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
