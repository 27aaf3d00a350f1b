//! Board state: the grid plus scores, turn and last move

use rand::Rng;

use crate::error::{Error, Result};
use crate::grid::{Dot, Grid};
use crate::MIN_BOARD_SIZE;

/// One of the two sides of the game
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

// which of a cell's four edges a claimed edge closes
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// A full game state: geometry, both scores, whose turn it is and the last
/// edge claimed
///
/// One live board exists per interactive session; the search clones it freely
/// for hypothetical play. All storage is owned, so `Clone` is a structurally
/// independent deep copy and mutating a clone never touches the original.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    human_score: u32,
    computer_score: u32,
    to_move: Player,
    last_move: Option<(Dot, Dot)>,
}

impl Board {
    /// Creates an empty board with `size` dots per side and random cell
    /// values between 1 and 5
    pub fn new(size: usize) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::with_cell_scores(size, |_, _| rng.gen_range(1..=5))
    }

    /// Creates an empty board, asking `cell_score` for the value of each
    /// cell by `(row, col)`
    ///
    /// The engine treats cell values as opaque positive weights; fixed values
    /// make games reproducible, which the tests rely on.
    pub fn with_cell_scores(
        size: usize,
        cell_score: impl FnMut(usize, usize) -> u32,
    ) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(Error::BoardTooSmall { got: size });
        }
        Ok(Self {
            grid: Grid::new(size, cell_score),
            human_score: 0,
            computer_score: 0,
            // the human opens the game
            to_move: Player::Human,
            last_move: None,
        })
    }

    /// The number of dots per side
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// The board geometry, for adjacency and edge queries
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current totals as `(human, computer)`
    pub fn scores(&self) -> (u32, u32) {
        (self.human_score, self.computer_score)
    }

    pub fn human_score(&self) -> u32 {
        self.human_score
    }

    pub fn computer_score(&self) -> u32 {
        self.computer_score
    }

    /// The side whose turn it is
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The edge claimed by the most recent move, if any
    pub fn last_move(&self) -> Option<(Dot, Dot)> {
        self.last_move
    }

    /// The computer's lead over the human; the search's leaf evaluation
    pub fn margin(&self) -> i64 {
        self.computer_score as i64 - self.human_score as i64
    }

    /// True once every edge on the board has been claimed
    pub fn is_over(&self) -> bool {
        self.grid.is_saturated()
    }

    /// Claims the edge between `a` and `b` on behalf of `as_player`, closing
    /// and crediting any cell the edge completes
    ///
    /// Returns false without changing anything if the edge already exists; a
    /// finished cell is never credited twice. Panics if the dots are out of
    /// range or not adjacent, which is a bug in the caller rather than a
    /// recoverable game condition. Does not advance the turn.
    pub fn apply_move(&mut self, a: Dot, b: Dot, as_player: Player) -> bool {
        if !self.grid.connect(a, b) {
            return false;
        }
        self.last_move = Some((a, b));
        self.close_cells(a, b, as_player);
        true
    }

    /// Plays a full move: claims the edge for `mover`, then hands the turn
    /// to the opponent
    ///
    /// Completing a cell does NOT earn another move; the turn alternates
    /// strictly. This differs from the traditional rules of the game family
    /// and is a deliberate rule choice, kept because changing it would change
    /// optimal play. Returns false, leaving the turn untouched, if the edge
    /// was already claimed.
    pub fn play(&mut self, a: Dot, b: Dot, mover: Player) -> bool {
        if !self.apply_move(a, b, mover) {
            return false;
        }
        self.to_move = mover.opponent();
        true
    }

    // Resolves the one or two cells bordering the new edge and closes the
    // matching side of each. A horizontal edge closes the top of the cell
    // below it and the bottom of the cell above it; boundary rows have only
    // one of the two. Vertical edges mirror this with columns.
    fn close_cells(&mut self, a: Dot, b: Dot, as_player: Player) {
        let last = self.grid.size() - 1;
        if a.x == b.x {
            // horizontal edge
            let col = a.y.min(b.y);
            if a.x == 0 {
                self.close_side(a.x, col, Side::Top, as_player);
            } else if a.x == last {
                self.close_side(a.x - 1, col, Side::Bottom, as_player);
            } else {
                self.close_side(a.x, col, Side::Top, as_player);
                self.close_side(a.x - 1, col, Side::Bottom, as_player);
            }
        } else {
            // vertical edge
            let row = a.x.min(b.x);
            if a.y == 0 {
                self.close_side(row, a.y, Side::Left, as_player);
            } else if a.y == last {
                self.close_side(row, a.y - 1, Side::Right, as_player);
            } else {
                self.close_side(row, a.y, Side::Left, as_player);
                self.close_side(row, a.y - 1, Side::Right, as_player);
            }
        }
    }

    fn close_side(&mut self, row: usize, col: usize, side: Side, as_player: Player) {
        let cell = self.grid.cell_mut(row, col);
        match side {
            Side::Top => cell.top = true,
            Side::Right => cell.right = true,
            Side::Bottom => cell.bottom = true,
            Side::Left => cell.left = true,
        }
        if cell.is_bounded() && !cell.credited {
            cell.credited = true;
            let score = cell.score();
            match as_player {
                Player::Human => self.human_score += score,
                Player::Computer => self.computer_score += score,
            }
            tracing::debug!(row, col, score, player = ?as_player, "cell completed");
        }
    }
}
