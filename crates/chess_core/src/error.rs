//! Error types for the rules engine.
//!
//! Every rejected request leaves the `GameState` untouched, so all of these
//! are recoverable by asking the caller for different input.

use thiserror::Error;

use crate::types::{Color, PieceKind, Square};

/// Reasons a move request is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Origin square is empty
    #[error("no piece on {square}")]
    NoPiece { square: Square },

    /// Piece belongs to the side that is not on move
    #[error("{square} holds a {color} piece but it is not {color}'s turn")]
    WrongSide { square: Square, color: Color },

    /// The piece cannot move that way
    #[error("illegal move {from}{to}")]
    Illegal { from: Square, to: Square },

    /// The move would leave the mover's king attacked
    #[error("move {from}{to} leaves the king in check")]
    ExposesKing { from: Square, to: Square },

    /// A pawn sits on the last rank waiting for its new kind
    #[error("promotion on {square} must be resolved first")]
    PromotionPending { square: Square },

    /// A promotion kind was supplied but nothing is waiting for one
    #[error("no promotion is pending")]
    NoPromotionPending,

    /// Pawns may only become a knight, bishop, rook or queen
    #[error("cannot promote to {kind:?}")]
    InvalidPromotion { kind: PieceKind },

    /// The game already reached checkmate, stalemate or a material draw
    #[error("the game is over")]
    GameOver,

    /// The state itself breaks a board invariant, e.g. two kings of one color
    #[error("corrupt position: {0}")]
    InvalidPosition(#[from] PositionError),
}

/// Structural problems with a position supplied by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("{color} has no king")]
    MissingKing { color: Color },

    #[error("{color} has {count} kings")]
    TooManyKings { color: Color, count: usize },

    #[error("{color} pawn on back rank square {square}")]
    PawnOnBackRank { color: Color, square: Square },
}

/// Failures while reading Forsyth-Edwards Notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 2 fields, found {0}")]
    MissingFields(usize),

    #[error("board section must have 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    FileCount { rank: usize },

    #[error("invalid piece character {0:?}")]
    PieceChar(char),

    #[error("invalid side to move {0:?}")]
    SideToMove(String),

    #[error("invalid en-passant square {0:?}")]
    EnPassant(String),

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Failures while reading coordinate notation such as `e2e4` or `e7e8q`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square {0:?}")]
    Square(String),

    #[error("invalid move text {0:?}")]
    Move(String),

    #[error("{0} is not a legal move in this position")]
    NotLegal(String),
}
