//! Minimax with alpha-beta pruning on White-referenced scores.
//!
//! White nodes maximise and Black nodes minimise `chess_core::evaluate`.
//! Every root move is searched with a full window so the root scores are
//! exact and ties between them are real ties.

use chess_core::{evaluate, has_legal_moves, legal_moves_into, GameState, Move, TimeControl};

use crate::eval::terminal_score;

/// Root moves scored at one depth.
pub struct RootOutcome {
    /// `(move, score)` in root order, scores from the side-to-move's perspective
    pub scored: Vec<(Move, i32)>,
    /// True if the budget ran out before every root move was scored
    pub stopped: bool,
}

impl RootOutcome {
    /// Highest root score, if any move was scored.
    pub fn best_score(&self) -> Option<i32> {
        self.scored.iter().map(|&(_, s)| s).max()
    }

    /// Every move sharing the highest score.
    pub fn best_moves(&self) -> Vec<Move> {
        let Some(best) = self.best_score() else {
            return Vec::new();
        };
        self.scored
            .iter()
            .filter(|&&(_, s)| s == best)
            .map(|&(mv, _)| mv)
            .collect()
    }
}

/// Scores the root moves of `state` at `depth`.
///
/// The first root move is always scored, so a non-empty move list yields at
/// least one entry even when the budget is already spent. Later root moves
/// are skipped once the clock has expired.
///
/// # Arguments
/// * `state` - The position to search
/// * `depth` - Search depth in plies, at least 1
/// * `nodes` - Counter for nodes searched (for statistics)
/// * `tc` - Time control polled at every node
pub fn score_root_moves(
    state: &GameState,
    depth: u8,
    nodes: &mut u64,
    tc: &TimeControl,
) -> RootOutcome {
    let mut tmp = state.clone();
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut moves);

    let sign = state.side_to_move.sign();
    let mut scored = Vec::with_capacity(moves.len());
    let mut stopped = false;

    for mv in moves {
        if !scored.is_empty() && tc.check_time() {
            stopped = true;
            break;
        }

        let undo = tmp.make_move(mv);
        *nodes += 1;
        let score = alpha_beta(
            &mut tmp,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            1,
            nodes,
            tc,
        );
        tmp.unmake_move(mv, undo);

        scored.push((mv, sign * score));
    }

    RootOutcome {
        scored,
        stopped: stopped || tc.is_stopped(),
    }
}

/// Recursive minimax with alpha-beta pruning.
///
/// Returns a White-referenced score. An expired clock turns the node into a
/// leaf scored by the static evaluation.
fn alpha_beta(
    state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: u32,
    nodes: &mut u64,
    tc: &TimeControl,
) -> i32 {
    if tc.check_time() {
        return evaluate(state);
    }

    let side = state.side_to_move;
    if depth == 0 {
        let has_moves = has_legal_moves(state, side);
        return match terminal_score(state, has_moves, ply) {
            Some(score) => side.sign() * score,
            None => evaluate(state),
        };
    }

    let mut moves = Vec::with_capacity(64);
    legal_moves_into(state, &mut moves);
    if let Some(score) = terminal_score(state, !moves.is_empty(), ply) {
        return side.sign() * score;
    }

    let maximizing = side.sign() > 0;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    let mut searched = false;

    for mv in moves {
        if searched && tc.is_stopped() {
            break;
        }

        let undo = state.make_move(mv);
        *nodes += 1;
        let val = alpha_beta(state, depth - 1, alpha, beta, ply + 1, nodes, tc);
        state.unmake_move(mv, undo);
        searched = true;

        if maximizing {
            best = best.max(val);
            alpha = alpha.max(val);
        } else {
            best = best.min(val);
            beta = beta.min(val);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
