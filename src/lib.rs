//! An engine for playing the pencil-and-paper game 'dots and boxes'
//! against a computer opponent.
//!
//! The engine models the board as a grid of dots with claimed edges between
//! them, and picks the computer's move with a bounded-depth minimax search
//! over fully cloned board states.
//!
//! # Basic Usage
//!
//! ```
//! use dots_ai::{board::{Board, Player}, grid::Dot, search};
//!
//!# fn main() -> dots_ai::Result<()> {
//! // a 3x3 dot board with every cell worth one point
//! let mut board = Board::with_cell_scores(3, |_, _| 1)?;
//! board.play(Dot::new(0, 0), Dot::new(0, 1), Player::Human);
//!
//! let outcome = search::select_move(&board, 2)?;
//! board.play(outcome.edge.0, outcome.edge.1, Player::Computer);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod grid;

pub mod board;

pub mod tree;

pub mod search;

pub mod session;


pub use error::{Error, Result};

/// The smallest playable board, measured in dots per side
pub const MIN_BOARD_SIZE: usize = 2;

/// The search depth used when the caller does not configure one
pub const DEFAULT_SEARCH_DEPTH: usize = 3;

// a board below the minimum has no cells, and a search with no lookahead
// cannot pick a move
const_assert!(MIN_BOARD_SIZE >= 2);
const_assert!(DEFAULT_SEARCH_DEPTH >= 1);
