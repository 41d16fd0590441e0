use crate::{board::GameState, rules::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
///
/// Promotions are counted once (as queen), matching the move list every
/// search strategy works from.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(state: &mut GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(state, buf);

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = state.make_move(mv);
            nodes += inner(state, depth - 1, rest);
            state.unmake_move(mv, undo);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(state, depth, &mut layers[..])
}

/// Perft split by root move, as `(move, nodes below it)` pairs.
pub fn perft_divide(state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    let mut roots = Vec::with_capacity(64);
    legal_moves_into(state, &mut roots);
    roots
        .into_iter()
        .map(|mv| {
            let undo = state.make_move(mv);
            let nodes = perft(state, depth.saturating_sub(1));
            state.unmake_move(mv, undo);
            (mv, nodes)
        })
        .collect()
}
