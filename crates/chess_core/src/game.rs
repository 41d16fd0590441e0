//! A game session: the authoritative state plus the bookkeeping a front end
//! needs (snapshot history for take-backs, move list, captured pieces).

use tracing::info;

use crate::{
    board::GameState,
    error::{MoveError, PositionError},
    status::{GameStatus, status},
    transition::{MoveReport, apply_move},
    types::*,
};

/// State before an accepted move, with what that move took.
#[derive(Clone, Debug)]
struct Snapshot {
    state: GameState,
    captured: Option<Piece>,
}

#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    /// newest last
    history: Vec<Snapshot>,
    moves: Vec<Move>,
    /// Pieces taken by each side, indexed by `Color::idx()` of the capturer
    captured: [Vec<Piece>; 2],
}

impl Game {
    pub fn new() -> Self {
        Self::from_valid_state(GameState::new_game())
    }

    /// Starts a session from a caller-built position.
    pub fn from_state(state: GameState) -> Result<Self, PositionError> {
        state.validate()?;
        Ok(Self::from_valid_state(state))
    }

    fn from_valid_state(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
            moves: Vec::new(),
            captured: [Vec::new(), Vec::new()],
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Pieces `color` has taken so far, in capture order.
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.idx()]
    }

    pub fn status(&self) -> GameStatus {
        status(&self.state)
    }

    /// Plays a move (or resolves a pending promotion) on the session state.
    ///
    /// On error nothing changes, the history included.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveReport, MoveError> {
        let snapshot = self.state.clone();
        let mover = self.state.side_to_move;
        let report = apply_move(&mut self.state, from, to, promotion)?;

        self.history.push(Snapshot {
            state: snapshot,
            captured: report.captured,
        });
        self.moves.push(report.mv);
        if let Some(pc) = report.captured {
            self.captured[mover.idx()].push(pc);
        }
        if report.status.is_terminal() {
            info!(status = ?report.status, plies = self.moves.len(), "game finished");
        }
        Ok(report)
    }

    /// Plays a move produced by a search strategy.
    pub fn play_move(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        self.play(mv.from, mv.to, mv.promotion)
    }

    /// Restores the snapshot taken before the last accepted move.
    ///
    /// Returns `false` when there is nothing to take back.
    pub fn undo(&mut self) -> bool {
        let Some(prev) = self.history.pop() else {
            return false;
        };
        self.moves.pop();
        if prev.captured.is_some() {
            self.captured[prev.state.side_to_move.idx()].pop();
        }
        self.state = prev.state;
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
