use std::str::FromStr;

use crate::{board::GameState, error::NotationError, rules::legal_moves, types::*};

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(NotationError::Square(s.to_string()));
        }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(NotationError::Square(s.to_string()));
        }
        Ok(Square::new(r - b'1', f - b'a'))
    }
}

fn promotion_from_char(ch: char) -> Option<PieceKind> {
    match ch {
        'q' | 'Q' => Some(PieceKind::Queen),
        'r' | 'R' => Some(PieceKind::Rook),
        'b' | 'B' => Some(PieceKind::Bishop),
        'n' | 'N' => Some(PieceKind::Knight),
        _ => None,
    }
}

/// Reads coordinate text (`e2e4`, `e7e8q`) without consulting a position.
pub fn parse_coordinate_move(txt: &str) -> Result<Move, NotationError> {
    let txt = txt.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(NotationError::Move(txt.to_string()));
    }
    let from: Square = txt[0..2].parse()?;
    let to: Square = txt[2..4].parse()?;
    let promotion = match txt[4..].chars().next() {
        None => None,
        Some(ch) => {
            Some(promotion_from_char(ch).ok_or_else(|| NotationError::Move(txt.to_string()))?)
        }
    };
    Ok(Move {
        from,
        to,
        promotion,
    })
}

/// Parses coordinate text and checks it against the legal moves of `state`.
///
/// The promotion letter is kept exactly as written: leaving it off a
/// promoting move yields `promotion: None`, which `apply_move` answers with a
/// pending promotion.
pub fn parse_move(state: &GameState, txt: &str) -> Result<Move, NotationError> {
    let parsed = parse_coordinate_move(txt)?;
    legal_moves(state)
        .into_iter()
        .find(|m| {
            m.from == parsed.from
                && m.to == parsed.to
                && (parsed.promotion.is_none() || m.promotion.is_some())
        })
        .map(|_| parsed)
        .ok_or_else(|| NotationError::NotLegal(txt.trim().to_string()))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
