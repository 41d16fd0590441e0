use crate::error::{FenError, PositionError};
use crate::types::*;

/// Everything the rules need to know about a game in progress.
///
/// The value is owned by the caller and only ever changed through
/// `make_move`/`unmake_move`, `apply_move` and `complete_promotion`.
/// Cloning yields an independent snapshot that can be restored verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub en_passant: Option<Square>, // square behind a pawn that just advanced 2
    pub pending_promotion: Option<Square>, // pawn on the last rank awaiting its new kind
}

impl GameState {
    /// Standard starting arrangement, White to move.
    pub fn new_game() -> Self {
        let mut s = GameState::empty(Color::White);

        for col in 0..8 {
            s.put(
                Square::new(Color::White.pawn_row(), col),
                Piece::new(Color::White, PieceKind::Pawn),
            );
            s.put(
                Square::new(Color::Black.pawn_row(), col),
                Piece::new(Color::Black, PieceKind::Pawn),
            );
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            s.put(Square::new(0, col as u8), Piece::new(Color::White, kind));
            s.put(Square::new(7, col as u8), Piece::new(Color::Black, kind));
        }
        s
    }

    /// Board with no pieces. Used to build fixtures piece by piece.
    pub fn empty(side_to_move: Color) -> Self {
        GameState {
            board: [None; 64],
            side_to_move,
            en_passant: None,
            pending_promotion: None,
        }
    }

    /// Places `piece` on `sq`, returning `self` for chaining.
    pub fn put(&mut self, sq: Square, piece: Piece) -> &mut Self {
        self.set_piece(sq, Some(piece));
        self
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        // Castling rights and the move clocks are read past but not modelled.
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };
        let mut state = GameState::empty(side_to_move);

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => return Err(FenError::PieceChar(ch)),
                    };
                    let sq = Square::try_new(row, col)
                        .ok_or(FenError::FileCount { rank: rank_idx + 1 })?;
                    state.put(sq, Piece::new(color, kind));
                    col += 1;
                }
                if col > 8 {
                    return Err(FenError::FileCount { rank: rank_idx + 1 });
                }
            }
            if col != 8 {
                return Err(FenError::FileCount { rank: rank_idx + 1 });
            }
        }

        state.en_passant = match parts.get(3).copied() {
            None | Some("-") => None,
            Some(text) => Some(
                text.parse::<Square>()
                    .map_err(|_| FenError::EnPassant(text.to_string()))?,
            ),
        };

        state.validate()?;
        Ok(state)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for row in (0..8u8).rev() {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.piece_at(Square::new(row, col)) {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        let ch = match pc.kind {
                            PieceKind::Pawn => 'p',
                            PieceKind::Knight => 'n',
                            PieceKind::Bishop => 'b',
                            PieceKind::Rook => 'r',
                            PieceKind::Queen => 'q',
                            PieceKind::King => 'k',
                        };
                        out.push(match pc.color {
                            Color::White => ch.to_ascii_uppercase(),
                            Color::Black => ch,
                        });
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row > 0 {
                out.push('/');
            }
        }
        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant
            .map(|sq| sq.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!("{out} {side} - {ep} 0 1")
    }

    /// Checks the structural invariants a caller-built position must satisfy:
    /// exactly one king per color and no pawns on either back rank.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in [Color::White, Color::Black] {
            let count = self
                .pieces(color)
                .filter(|(_, pc)| pc.kind == PieceKind::King)
                .count();
            match count {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                _ => return Err(PositionError::TooManyKings { color, count }),
            }
        }
        for (sq, pc) in self.occupied() {
            if pc.kind == PieceKind::Pawn
                && (sq.row == 0 || sq.row == 7)
                && self.pending_promotion != Some(sq)
            {
                return Err(PositionError::PawnOnBackRank {
                    color: pc.color,
                    square: sq,
                });
            }
        }
        Ok(())
    }

    /// Panics with the violated invariant if `validate` fails.
    pub fn assert_valid(&self) {
        if let Err(err) = self.validate() {
            panic!("corrupt position {}: {err}", self.to_fen());
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.index()] = pc;
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces(c)
            .find(|(_, pc)| pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Every occupied square with its piece.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (Square::from_index(i), pc)))
    }

    /// Squares and pieces belonging to `color`.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, pc)| pc.color == color)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
