//! Leaf scoring shared by both tree searches.

use chess_core::{in_check, is_insufficient_material, GameState, MATE_SCORE};

/// Score of a finished game for the side to move, `None` while play goes on.
///
/// `has_moves` is whether the side to move has a legal move. Being mated at
/// `ply` scores `-(MATE_SCORE - ply)` so nearer mates weigh more; stalemate
/// and dead material score 0.
pub fn terminal_score(state: &GameState, has_moves: bool, ply: u32) -> Option<i32> {
    if is_insufficient_material(state) {
        return Some(0);
    }
    if has_moves {
        return None;
    }
    if in_check(state, state.side_to_move) {
        Some(-(MATE_SCORE - ply as i32))
    } else {
        Some(0)
    }
}
