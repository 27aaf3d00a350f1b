//! Minimax value backup and move selection

use std::time::Instant;

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::grid::Dot;
use crate::tree::{Label, Node};

/// The move a search settled on, with its diagnostics
#[derive(Copy, Clone, Debug)]
pub struct SearchOutcome {
    /// The two dots to connect
    pub edge: (Dot, Dot),
    /// The backed-up value of the chosen line of play
    pub value: i64,
    /// The number of tree nodes the search generated
    pub nodes: usize,
}

/// Picks the computer's reply to `board` by expanding the game tree
/// depth-first to `depth` plies and backing minimax values up to the root
///
/// The root child whose value matches the root's backed-up value is chosen;
/// on a tie the FIRST such child in generation order wins, which keeps move
/// selection deterministic. A board with no legal moves anywhere reports
/// [`Error::Exhausted`]; that is the natural end of the game, not a fault.
pub fn select_move(board: &Board, depth: usize) -> Result<SearchOutcome> {
    run(board, depth, false)
}

/// Like [`select_move`], generating each node's children in parallel
///
/// Selects the same move as the sequential search; see
/// [`Node::generate_parallel`].
pub fn select_move_parallel(board: &Board, depth: usize) -> Result<SearchOutcome> {
    run(board, depth, true)
}

/// Runs a search against `live` and plays the chosen move on it with
/// computer semantics
pub fn search(live: &mut Board, depth: usize) -> Result<SearchOutcome> {
    let outcome = select_move_parallel(live, depth)?;
    live.play(outcome.edge.0, outcome.edge.1, Player::Computer);
    Ok(outcome)
}

fn run(board: &Board, depth: usize, parallel: bool) -> Result<SearchOutcome> {
    if depth == 0 {
        return Err(Error::DepthTooShallow);
    }
    let started = Instant::now();

    let mut root = Node::root(board.clone());
    if parallel {
        root.generate_parallel(depth);
    } else {
        root.generate(depth);
    }

    let value = back_up(&mut root);
    let nodes = root.count();

    let chosen = root
        .children()
        .iter()
        .find(|child| child.value() == value)
        .ok_or(Error::Exhausted)?;
    let edge = chosen
        .board()
        .last_move()
        .expect("a generated child always records the move that produced it");

    tracing::debug!(
        nodes,
        value,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search complete"
    );
    Ok(SearchOutcome { edge, value, nodes })
}

// Backs values up from the leaves: a leaf is worth the computer's scoring
// margin on its board, an internal node the max (Max) or min (Min) of its
// children.
fn back_up(node: &mut Node) -> i64 {
    if node.is_leaf() {
        node.value = node.board().margin();
        return node.value;
    }
    let values: Vec<i64> = node.children_mut().iter_mut().map(back_up).collect();
    node.value = match node.label() {
        Label::Max => values.into_iter().max(),
        Label::Min => values.into_iter().min(),
    }
    .expect("an internal node has at least one child");
    node.value
}
