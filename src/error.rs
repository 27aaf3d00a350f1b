//! Error types for the dots and boxes engine

use thiserror::Error;

use crate::grid::Dot;

/// Everything that can go wrong while driving a game.
///
/// Rejected moves and an exhausted board are ordinary game outcomes, reported
/// rather than panicking. Out-of-range coordinates are a caller bug and panic
/// at the board boundary instead of appearing here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("it is not the human's turn to move")]
    OutOfTurn,

    #[error("dots {a} and {b} are not adjacent")]
    NotAdjacent { a: Dot, b: Dot },

    #[error("dots {a} and {b} are already connected")]
    AlreadyConnected { a: Dot, b: Dot },

    #[error("no legal moves remain on the board")]
    Exhausted,

    #[error("board must have at least 2 dots per side, got {got}")]
    BoardTooSmall { got: usize },

    #[error("search depth must be at least 1")]
    DepthTooShallow,
}

/// Convenience alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
