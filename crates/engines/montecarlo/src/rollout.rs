//! Random playouts.

use chess_core::{evaluate, legal_moves_into, GameState, Move, Undo};
use rand::seq::SliceRandom;
use rand::Rng;

/// Plays up to `max_plies` uniformly random legal moves from `state`, scores
/// the position reached with the static evaluation (White-positive), and
/// takes every move back.
///
/// Stops early when the side to move has no legal move. `nodes` counts the
/// moves played.
pub fn playout<R: Rng + ?Sized>(
    state: &mut GameState,
    max_plies: u16,
    rng: &mut R,
    nodes: &mut u64,
) -> i32 {
    let mut played: Vec<(Move, Undo)> = Vec::with_capacity(max_plies as usize);
    let mut moves = Vec::with_capacity(64);

    for _ in 0..max_plies {
        legal_moves_into(state, &mut moves);
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        let undo = state.make_move(mv);
        played.push((mv, undo));
        *nodes += 1;
    }

    let score = evaluate(state);
    while let Some((mv, undo)) = played.pop() {
        state.unmake_move(mv, undo);
    }
    score
}

#[cfg(test)]
#[path = "rollout_tests.rs"]
mod rollout_tests;
