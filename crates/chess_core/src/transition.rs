//! Applying and reverting moves.
//!
//! `make_move`/`unmake_move` are the raw pair used by legality checks and by
//! every search strategy; they trust their input. `apply_move` is the checked
//! entry point for callers: it validates the request, plays it through
//! `make_move`, and reports the capture, the inverse patch and the resulting
//! game status.

use tracing::debug;

use crate::{
    board::GameState,
    error::MoveError,
    rules::{is_pseudo_legal, leaves_king_safe},
    status::{GameStatus, status},
    types::*,
};

/// Inverse patch for one `make_move`.
///
/// Holds every fact the move may have changed, so `unmake_move` restores the
/// state exactly no matter which of them actually changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    pub moved_piece: Piece,
    pub captured: Option<Piece>,
    pub ep_captured: Option<(Square, Piece)>, // pawn removed by an en-passant capture
    pub en_passant: Option<Square>,
    pub side_to_move: Color,
    pub pending_promotion: Option<Square>,
}

impl Undo {
    /// The piece taken by the move, whether captured normally or en passant.
    pub fn taken(&self) -> Option<Piece> {
        self.captured.or(self.ep_captured.map(|(_, pc)| pc))
    }
}

/// Outcome of a successful `apply_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub captured: Option<Piece>,
    pub undo: Undo,
    pub status: GameStatus,
}

impl GameState {
    /// Plays `mv` without any legality check.
    ///
    /// A pawn reaching its last rank becomes `mv.promotion` and the turn
    /// passes; with no promotion kind the pawn waits on the last rank, the
    /// square is recorded in `pending_promotion` and the turn does not pass.
    /// A move from the pending square to itself carrying a kind resolves the
    /// promotion.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        let mut undo = Undo {
            moved_piece: moved,
            captured: self.piece_at(mv.to),
            ep_captured: None,
            en_passant: self.en_passant,
            side_to_move: self.side_to_move,
            pending_promotion: self.pending_promotion,
        };

        if self.pending_promotion == Some(mv.from) && mv.from == mv.to {
            let kind = mv.promotion.unwrap_or(PieceKind::Queen);
            undo.captured = None;
            self.set_piece(mv.to, Some(Piece::new(moved.color, kind)));
            self.pending_promotion = None;
            self.side_to_move = moved.color.other();
            return undo;
        }

        let is_pawn = moved.kind == PieceKind::Pawn;

        // En passant: diagonal pawn step onto the empty target square
        if is_pawn
            && mv.from.col != mv.to.col
            && undo.captured.is_none()
            && self.en_passant == Some(mv.to)
        {
            // the victim sits beside the mover, one rank behind the destination
            let victim_sq = Square::new(mv.from.row, mv.to.col);
            if let Some(victim) = self.piece_at(victim_sq) {
                self.set_piece(victim_sq, None);
                undo.ep_captured = Some((victim_sq, victim));
            }
        }

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));

        // Double pawn push sets en-passant square
        self.en_passant = if is_pawn && (mv.to.row as i8 - mv.from.row as i8).abs() == 2 {
            mv.from.offset(moved.color.forward(), 0)
        } else {
            None
        };

        if is_pawn && mv.to.row == moved.color.promotion_row() {
            match mv.promotion {
                Some(kind) => {
                    self.set_piece(mv.to, Some(Piece::new(moved.color, kind)));
                    self.pending_promotion = None;
                    self.side_to_move = moved.color.other();
                }
                None => {
                    self.pending_promotion = Some(mv.to);
                }
            }
        } else {
            self.pending_promotion = None;
            self.side_to_move = moved.color.other();
        }

        undo
    }

    /// Reverts a `make_move` of `mv` that returned `undo`.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        // `to` first: for a promotion resolution `from == to`
        self.set_piece(mv.to, undo.captured);
        self.set_piece(mv.from, Some(undo.moved_piece));
        if let Some((sq, pc)) = undo.ep_captured {
            self.set_piece(sq, Some(pc));
        }
        self.en_passant = undo.en_passant;
        self.side_to_move = undo.side_to_move;
        self.pending_promotion = undo.pending_promotion;
    }

    /// Resolves a pending promotion by turning the waiting pawn into `kind`.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> Result<Undo, MoveError> {
        let sq = self.pending_promotion.ok_or(MoveError::NoPromotionPending)?;
        if !kind.is_promotion_target() {
            return Err(MoveError::InvalidPromotion { kind });
        }
        Ok(self.make_move(Move::with_promotion(sq, sq, kind)))
    }
}

/// Checked move entry point.
///
/// Rejected requests leave `state` untouched. While a promotion is pending
/// the only accepted request is `(sq, sq, Some(kind))` on the pending square.
/// A state failing `GameState::validate` is refused with
/// `MoveError::InvalidPosition`.
pub fn apply_move(
    state: &mut GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<MoveReport, MoveError> {
    let result = try_apply(state, from, to, promotion);
    if let Err(err) = &result {
        debug!(%from, %to, ?promotion, %err, "move rejected");
    }
    result
}

fn try_apply(
    state: &mut GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<MoveReport, MoveError> {
    state.validate()?;

    if let Some(square) = state.pending_promotion {
        if from != square || to != square {
            return Err(MoveError::PromotionPending { square });
        }
        let kind = promotion.ok_or(MoveError::PromotionPending { square })?;
        let undo = state.complete_promotion(kind)?;
        return Ok(MoveReport {
            mv: Move::with_promotion(square, square, kind),
            captured: None,
            undo,
            status: status(state),
        });
    }

    if status(state).is_terminal() {
        return Err(MoveError::GameOver);
    }

    let piece = state
        .piece_at(from)
        .ok_or(MoveError::NoPiece { square: from })?;
    if piece.color != state.side_to_move {
        return Err(MoveError::WrongSide {
            square: from,
            color: piece.color,
        });
    }
    if !is_pseudo_legal(state, from, to) {
        return Err(MoveError::Illegal { from, to });
    }

    let promoting = piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row();
    match promotion {
        Some(_) if !promoting => return Err(MoveError::Illegal { from, to }),
        Some(kind) if !kind.is_promotion_target() => {
            return Err(MoveError::InvalidPromotion { kind });
        }
        _ => {}
    }

    let mv = Move {
        from,
        to,
        promotion,
    };
    if !leaves_king_safe(state, mv) {
        return Err(MoveError::ExposesKing { from, to });
    }

    let undo = state.make_move(mv);
    Ok(MoveReport {
        mv,
        captured: undo.taken(),
        undo,
        status: status(state),
    })
}

/// Takes back a move previously returned by `apply_move`.
pub fn undo_move(state: &mut GameState, report: &MoveReport) {
    state.unmake_move(report.mv, report.undo);
}

#[cfg(test)]
#[path = "transition_tests.rs"]
mod transition_tests;
