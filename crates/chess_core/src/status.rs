//! Terminal-state detection: check, checkmate, stalemate and draws by
//! insufficient material.

use crate::{
    board::GameState,
    rules::{has_legal_moves, in_check},
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The named side is in check but has a way out
    Check(Color),
    Checkmate {
        loser: Color,
    },
    Stalemate,
    DrawInsufficientMaterial,
    /// A pawn waits on this square for its promotion kind; the mover keeps the turn
    AwaitingPromotion(Square),
}

impl GameStatus {
    /// Checkmate, stalemate and material draws end the game for good.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. }
                | GameStatus::Stalemate
                | GameStatus::DrawInsufficientMaterial
        )
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { loser } => Some(loser.other()),
            _ => None,
        }
    }
}

/// No pawns, no rooks or queens, and at most one knight or bishop per side.
pub fn is_insufficient_material(state: &GameState) -> bool {
    let mut minors = [0u32; 2];
    for (_, pc) in state.occupied() {
        match pc.kind {
            PieceKind::King => {}
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight | PieceKind::Bishop => minors[pc.color.idx()] += 1,
        }
    }
    minors.iter().all(|&n| n <= 1)
}

/// Classifies the position for the side to move.
///
/// The cheap material test runs before the legal-move enumeration, so a
/// material draw is reported even when moves remain.
///
/// # Panics
/// If `state` fails `GameState::validate`; such a board is a construction bug.
pub fn status(state: &GameState) -> GameStatus {
    state.assert_valid();
    if let Some(sq) = state.pending_promotion {
        return GameStatus::AwaitingPromotion(sq);
    }
    if is_insufficient_material(state) {
        return GameStatus::DrawInsufficientMaterial;
    }

    let side = state.side_to_move;
    let checked = in_check(state, side);
    match (has_legal_moves(state, side), checked) {
        (false, true) => GameStatus::Checkmate { loser: side },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check(side),
        (true, false) => GameStatus::Ongoing,
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
