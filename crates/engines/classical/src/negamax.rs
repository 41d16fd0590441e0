//! Negamax with alpha-beta pruning.
//!
//! One recursion for both sides: `perspective` is +1 when White is on move
//! and -1 when Black is, and the leaf score is `perspective * evaluate`.

use chess_core::{evaluate, has_legal_moves, legal_moves_into, GameState, Move, TimeControl};

use crate::eval::terminal_score;

/// Best root move with its score from the side-to-move's perspective.
pub struct NegamaxOutcome {
    pub best_move: Option<(Move, i32)>,
    pub stopped: bool,
}

/// Fixed-depth negamax from the root; the first move reaching the best score
/// wins.
pub fn pick_best_move(
    state: &GameState,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> NegamaxOutcome {
    let mut tmp = state.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut moves);

    let perspective = state.side_to_move.sign();
    let mut alpha = i32::MIN / 2;
    let beta = i32::MAX / 2;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        if best.is_some() && tc.check_time() {
            break;
        }

        let undo = tmp.make_move(mv);
        *nodes += 1;
        let score = -negamax(
            &mut tmp,
            depth.saturating_sub(1),
            -beta,
            -alpha,
            -perspective,
            1,
            nodes,
            tc,
        );
        tmp.unmake_move(mv, undo);

        if best.map_or(true, |(_, b)| score > b) {
            best = Some((mv, score));
        }
        alpha = alpha.max(score);
    }

    NegamaxOutcome {
        best_move: best,
        stopped: tc.is_stopped(),
    }
}

/// `negamax(d, α, β, p) = max over moves of −negamax(d−1, −β, −α, −p)`.
#[allow(clippy::too_many_arguments)]
fn negamax(
    state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    perspective: i32,
    ply: u32,
    nodes: &mut u64,
    tc: &TimeControl,
) -> i32 {
    if tc.check_time() {
        return perspective * evaluate(state);
    }

    if depth == 0 {
        let has_moves = has_legal_moves(state, state.side_to_move);
        return terminal_score(state, has_moves, ply)
            .unwrap_or_else(|| perspective * evaluate(state));
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(state, &mut moves);
    if let Some(score) = terminal_score(state, !moves.is_empty(), ply) {
        return score;
    }

    let mut best = i32::MIN + 1;
    let mut searched = false;
    for mv in moves {
        if searched && tc.is_stopped() {
            break;
        }

        let undo = state.make_move(mv);
        *nodes += 1;
        let score = -negamax(state, depth - 1, -beta, -alpha, -perspective, ply + 1, nodes, tc);
        state.unmake_move(mv, undo);
        searched = true;

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    best
}

#[cfg(test)]
#[path = "negamax_tests.rs"]
mod negamax_tests;
