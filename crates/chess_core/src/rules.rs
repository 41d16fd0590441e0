//! Move legality.
//!
//! A move is *pseudo-legal* when it matches the movement pattern of the
//! piece on the origin square; it is *legal* when it is pseudo-legal and the
//! mover's king is not attacked once the move has been played. Legality is
//! tested by playing the move with `make_move` and taking it back with
//! `unmake_move`, so the position a caller hands in is never changed.

use crate::{board::GameState, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True when every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares on a shared row, column or diagonal.
pub fn is_path_clear(state: &GameState, from: Square, to: Square) -> bool {
    let row_step = (to.row as i8 - from.row as i8).signum();
    let col_step = (to.col as i8 - from.col as i8).signum();
    let mut cur = from.offset(row_step, col_step);
    while let Some(sq) = cur {
        if sq == to {
            return true;
        }
        if state.piece_at(sq).is_some() {
            return false;
        }
        cur = sq.offset(row_step, col_step);
    }
    true
}

/// Movement-pattern check for the piece on `from`, ignoring king safety and
/// whose turn it is.
pub fn is_pseudo_legal(state: &GameState, from: Square, to: Square) -> bool {
    let Some(pc) = state.piece_at(from) else {
        return false;
    };
    if from == to {
        return false;
    }
    let target = state.piece_at(to);
    if let Some(t) = target
        && t.color == pc.color
    {
        return false;
    }

    let dr = to.row as i8 - from.row as i8;
    let dc = to.col as i8 - from.col as i8;
    match pc.kind {
        PieceKind::Pawn => {
            let dir = pc.color.forward();
            if dc == 0 {
                if dr == dir && target.is_none() {
                    return true;
                }
                from.row == pc.color.pawn_row()
                    && dr == 2 * dir
                    && target.is_none()
                    && from
                        .offset(dir, 0)
                        .is_some_and(|mid| state.piece_at(mid).is_none())
            } else if dc.abs() == 1 && dr == dir {
                target.is_some() || state.en_passant == Some(to)
            } else {
                false
            }
        }
        PieceKind::Knight => {
            (dr.abs() == 2 && dc.abs() == 1) || (dr.abs() == 1 && dc.abs() == 2)
        }
        PieceKind::Bishop => dr.abs() == dc.abs() && is_path_clear(state, from, to),
        PieceKind::Rook => (dr == 0 || dc == 0) && is_path_clear(state, from, to),
        PieceKind::Queen => {
            (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && is_path_clear(state, from, to)
        }
        PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
    }
}

/// True when some piece of color `by` has a pseudo-legal move onto `target`.
///
/// Intended for occupied squares (the king's square): a pawn push onto an
/// empty square would also count as "reaching" it.
pub fn is_attacked(state: &GameState, target: Square, by: Color) -> bool {
    state
        .pieces(by)
        .any(|(sq, _)| is_pseudo_legal(state, sq, target))
}

pub fn in_check(state: &GameState, c: Color) -> bool {
    match state.king_square(c) {
        Some(ksq) => is_attacked(state, ksq, c.other()),
        None => false,
    }
}

/// Plays `mv` on `state`, tests the mover's king, and takes the move back.
pub fn leaves_king_safe(state: &mut GameState, mv: Move) -> bool {
    let Some(mover) = state.piece_at(mv.from).map(|pc| pc.color) else {
        return false;
    };
    let undo = state.make_move(mv);
    let safe = !in_check(state, mover);
    state.unmake_move(mv, undo);
    safe
}

/// Full legality of moving the piece on `from` to `to`.
///
/// Whose turn it is does not matter here; `apply_move` enforces that. While
/// a promotion is pending nothing on the board may move.
pub fn is_legal(state: &GameState, from: Square, to: Square) -> bool {
    if state.pending_promotion.is_some() || !is_pseudo_legal(state, from, to) {
        return false;
    }
    let mut tmp = state.clone();
    leaves_king_safe(&mut tmp, move_for(state, from, to))
}

/// Builds the move record for `from -> to`, adding the default queen
/// promotion when a pawn lands on its last rank.
pub fn move_for(state: &GameState, from: Square, to: Square) -> Move {
    match state.piece_at(from) {
        Some(pc) if pc.kind == PieceKind::Pawn && to.row == pc.color.promotion_row() => {
            Move::with_promotion(from, to, PieceKind::Queen)
        }
        _ => Move::new(from, to),
    }
}

/// Squares the piece on `sq` may legally move to.
pub fn legal_destinations(state: &GameState, sq: Square) -> Vec<Square> {
    let mut tmp = state.clone();
    let mut out = Vec::with_capacity(32);
    piece_moves_into(&mut tmp, sq, &mut out);
    out.into_iter().map(|mv| mv.to).collect()
}

/// Generate all legal moves for the side to move, returning a freshly
/// allocated vector. Delegates to `legal_moves_into` on a single clone.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut tmp = state.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves for the side to move into the provided buffer.
///
/// `state` is borrowed mutably for in-place make/unmake and is returned
/// unchanged.
pub fn legal_moves_into(state: &mut GameState, out: &mut Vec<Move>) {
    let side = state.side_to_move;
    legal_moves_for_into(state, side, out);
}

/// Legal moves for the pieces of `color`, whoever is on move.
pub fn legal_moves_for_into(state: &mut GameState, color: Color, out: &mut Vec<Move>) {
    out.clear();
    if state.pending_promotion.is_some() {
        return;
    }
    let origins: Vec<Square> = state.pieces(color).map(|(sq, _)| sq).collect();
    let mut buf = Vec::with_capacity(32);
    for from in origins {
        piece_moves_into(state, from, &mut buf);
        out.append(&mut buf);
    }
}

pub fn has_legal_moves(state: &GameState, color: Color) -> bool {
    if state.pending_promotion.is_some() {
        return false;
    }
    let mut tmp = state.clone();
    let origins: Vec<Square> = tmp.pieces(color).map(|(sq, _)| sq).collect();
    let mut buf = Vec::with_capacity(32);
    origins.into_iter().any(|from| {
        piece_moves_into(&mut tmp, from, &mut buf);
        !buf.is_empty()
    })
}

/// Legal moves of the single piece on `from`.
fn piece_moves_into(state: &mut GameState, from: Square, out: &mut Vec<Move>) {
    out.clear();
    if state.pending_promotion.is_some() {
        return;
    }
    let mut targets = Vec::with_capacity(32);
    pseudo_destinations(state, from, &mut targets);
    for to in targets {
        let mv = move_for(state, from, to);
        if leaves_king_safe(state, mv) {
            out.push(mv);
        }
    }
}

/// Candidate destinations of the piece on `from` that pass `is_pseudo_legal`.
///
/// Walks only the squares the piece's pattern can reach instead of all 64.
/// Stepping pieces go through `is_pseudo_legal` directly; sliders walk their
/// rays until blocked.
pub fn pseudo_destinations(state: &GameState, from: Square, out: &mut Vec<Square>) {
    out.clear();
    let Some(pc) = state.piece_at(from) else {
        return;
    };
    let push = |to: Option<Square>, out: &mut Vec<Square>| {
        if let Some(to) = to
            && is_pseudo_legal(state, from, to)
        {
            out.push(to);
        }
    };
    match pc.kind {
        PieceKind::Pawn => {
            let dir = pc.color.forward();
            push(from.offset(dir, 0), out);
            push(from.offset(2 * dir, 0), out);
            push(from.offset(dir, -1), out);
            push(from.offset(dir, 1), out);
        }
        PieceKind::Knight => {
            for (dr, dc) in KNIGHT_DELTAS {
                push(from.offset(dr, dc), out);
            }
        }
        PieceKind::King => {
            for (dr, dc) in KING_DELTAS {
                push(from.offset(dr, dc), out);
            }
        }
        PieceKind::Bishop => gen_slider(state, from, pc.color, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(state, from, pc.color, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(state, from, pc.color, &DIAGONALS, out);
            gen_slider(state, from, pc.color, &ORTHOGONALS, out);
        }
    }
}

fn gen_slider(
    state: &GameState,
    from: Square,
    c: Color,
    dirs: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match state.piece_at(to) {
                None => out.push(to),
                Some(pc) if pc.color != c => {
                    out.push(to);
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
