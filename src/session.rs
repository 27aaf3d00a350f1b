//! The interactive session: the live board, its turn lock, and the
//! background search worker

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::grid::Dot;
use crate::search;

/// What the search worker reports back after a human move
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ComputerTurn {
    /// The computer claimed an edge on the live board
    Played {
        edge: (Dot, Dot),
        /// Backed-up value of the chosen line
        value: i64,
        /// Nodes generated by the search
        nodes: usize,
    },
    /// No legal move remained; the board is finished and was left unchanged
    Exhausted,
}

/// One interactive game: the live board plus the machinery to answer each
/// human move with a searched computer move
///
/// The live board is mutated in exactly two places: here, when a human move
/// is accepted, and on the worker thread, when the searched reply is played.
/// The turn flag keeps the two from overlapping; while a search is in
/// flight it is the computer's turn and every human move is rejected with
/// [`Error::OutOfTurn`].
pub struct Session {
    board: Arc<Mutex<Board>>,
    depth: usize,
    outcomes: Receiver<ComputerTurn>,
    sender: Sender<ComputerTurn>,
    worker: Option<JoinHandle<()>>,
}

impl Session {
    /// Starts a game on a fresh board with random cell values
    pub fn new(size: usize, depth: usize) -> Result<Self> {
        let board = Board::new(size)?;
        Self::from_board(board, depth)
    }

    /// Starts a game with caller-chosen cell values, for reproducible play
    pub fn with_cell_scores(
        size: usize,
        depth: usize,
        cell_score: impl FnMut(usize, usize) -> u32,
    ) -> Result<Self> {
        let board = Board::with_cell_scores(size, cell_score)?;
        Self::from_board(board, depth)
    }

    fn from_board(board: Board, depth: usize) -> Result<Self> {
        if depth == 0 {
            return Err(Error::DepthTooShallow);
        }
        let (sender, outcomes) = unbounded();
        Ok(Self {
            board: Arc::new(Mutex::new(board)),
            depth,
            outcomes,
            sender,
            worker: None,
        })
    }

    /// The dot count per side of the live board
    pub fn size(&self) -> usize {
        self.board.lock().size()
    }

    /// Current totals as `(human, computer)`
    pub fn scores(&self) -> (u32, u32) {
        self.board.lock().scores()
    }

    /// An independent copy of the live board, for rendering
    pub fn snapshot(&self) -> Board {
        self.board.lock().clone()
    }

    /// True once every edge has been claimed; the standing scores are final
    pub fn is_over(&self) -> bool {
        self.board.lock().is_over()
    }

    pub fn search_depth(&self) -> usize {
        self.depth
    }

    /// Sets the depth bound used by the NEXT search; a search already in
    /// flight keeps the depth it started with
    pub fn set_search_depth(&mut self, depth: usize) -> Result<()> {
        if depth == 0 {
            return Err(Error::DepthTooShallow);
        }
        self.depth = depth;
        Ok(())
    }

    /// A receiver of the worker's reports, one per accepted human move
    pub fn outcomes(&self) -> &Receiver<ComputerTurn> {
        &self.outcomes
    }

    /// Claims `a`-`b` for the human and dispatches the computer's answering
    /// search to a worker thread
    ///
    /// Rejections leave the board untouched: [`Error::OutOfTurn`] while the
    /// computer is (or is still) moving, [`Error::NotAdjacent`] and
    /// [`Error::AlreadyConnected`] for impossible edges. Out-of-range
    /// coordinates panic; the presentation layer owns input validation.
    pub fn apply_human_move(&mut self, a: Dot, b: Dot) -> Result<()> {
        {
            let mut board = self.board.lock();
            validate_human_move(&board, a, b)?;
            board.play(a, b, Player::Human);
        }
        tracing::info!(%a, %b, "human claimed an edge");
        // it is the computer's turn now, so the previous worker (if any) has
        // long since released the board
        self.join_worker();
        self.dispatch_search();
        Ok(())
    }

    // Snapshot the live board, search the snapshot off-thread, then replay
    // the chosen edge onto the live board by coordinates and report back.
    fn dispatch_search(&mut self) {
        let board = Arc::clone(&self.board);
        let sender = self.sender.clone();
        let depth = self.depth;
        self.worker = Some(thread::spawn(move || {
            let snapshot = board.lock().clone();
            match search::select_move_parallel(&snapshot, depth) {
                Ok(outcome) => {
                    board
                        .lock()
                        .play(outcome.edge.0, outcome.edge.1, Player::Computer);
                    tracing::info!(
                        a = %outcome.edge.0,
                        b = %outcome.edge.1,
                        value = outcome.value,
                        nodes = outcome.nodes,
                        "computer claimed an edge"
                    );
                    let _ = sender.send(ComputerTurn::Played {
                        edge: outcome.edge,
                        value: outcome.value,
                        nodes: outcome.nodes,
                    });
                }
                // depth is validated at construction, so exhaustion is the
                // only error a search can report
                Err(_) => {
                    tracing::info!("board exhausted, no move available");
                    let _ = sender.send(ComputerTurn::Exhausted);
                }
            }
        }));
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.join_worker();
    }
}

// The rejection rules for a human move, split out so they can be checked
// against any board state.
pub(crate) fn validate_human_move(board: &Board, a: Dot, b: Dot) -> Result<()> {
    if board.to_move() != Player::Human {
        return Err(Error::OutOfTurn);
    }
    if !board.grid().are_adjacent(a, b) {
        return Err(Error::NotAdjacent { a, b });
    }
    if board.grid().has_connection(a, b) {
        return Err(Error::AlreadyConnected { a, b });
    }
    Ok(())
}
