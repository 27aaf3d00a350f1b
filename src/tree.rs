//! Game-tree nodes and bounded-depth generation

use rayon::prelude::*;

use crate::board::{Board, Player};
use crate::grid::Dot;

/// Whether a node picks the best move for the computer (`Max`) or assumes
/// the human answers with their best reply (`Min`)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Label {
    Min,
    Max,
}

impl Label {
    /// The label of the next level down; levels alternate strictly
    pub fn flip(self) -> Self {
        match self {
            Label::Min => Label::Max,
            Label::Max => Label::Min,
        }
    }

    /// Which side's move produces a child with this label
    ///
    /// A child is the state reached after the mover just played, so `Min`
    /// children (human to choose next) are produced by computer moves and
    /// `Max` children by human moves. Swapping this table inverts the
    /// opponent's whole strategy, so it lives here and nowhere else.
    pub fn mover(self) -> Player {
        match self {
            Label::Min => Player::Computer,
            Label::Max => Player::Human,
        }
    }
}

/// One node of the search tree: a fully owned board clone, its level label,
/// and its children in generation order
///
/// Children are owned exclusively by their parent; traversal context comes
/// from recursion, so no back-references are kept. The `value` field is only
/// meaningful after backup.
pub struct Node {
    label: Label,
    board: Board,
    children: Vec<Node>,
    pub(crate) value: i64,
}

impl Node {
    /// The search root: always a `Max` node, holding a clone of the board
    /// the computer must answer
    pub fn root(board: Board) -> Self {
        Self {
            label: Label::Max,
            board,
            children: Vec::new(),
            value: 0,
        }
    }

    // A child one level below `label.flip()`, reached by claiming the edge
    // `a`-`b` on a clone of `board`. The move is applied by coordinates, so
    // it lands on the clone's own dots.
    fn played(board: &Board, label: Label, a: Dot, b: Dot) -> Self {
        let mut board = board.clone();
        board.play(a, b, label.mover());
        Self {
            label,
            board,
            children: Vec::new(),
            value: 0,
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// The backed-up minimax value; zero until backup has run
    pub fn value(&self) -> i64 {
        self.value
    }

    /// A node with no children, either past the depth bound or on a board
    /// with no moves left
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The number of nodes in this subtree, for search diagnostics
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// The longest root-to-leaf distance in this subtree
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.height())
            .max()
            .unwrap_or(0)
    }

    /// Expands this node depth-first down to `depth` levels
    ///
    /// Every open `(dot, adjacent)` pair of this node's board becomes one
    /// child, in enumeration order; each child's subtree is generated before
    /// its next sibling is created. A board with no open pairs leaves the
    /// node childless regardless of remaining depth.
    pub fn generate(&mut self, depth: usize) {
        if depth == 0 {
            return;
        }
        let label = self.label.flip();
        for (a, b) in self.board.grid().open_pairs() {
            let mut child = Node::played(&self.board, label, a, b);
            child.generate(depth - 1);
            self.children.push(child);
        }
    }

    /// Expands this node like [`generate`](Self::generate), fanning the
    /// direct children out across the rayon pool
    ///
    /// Each child expands its own subtree on its own task over its own board
    /// clone; collecting the mapped children joins them all, in enumeration
    /// order, before this call returns. The resulting tree is identical to
    /// the sequential one, so the parallelism is purely a throughput choice.
    pub fn generate_parallel(&mut self, depth: usize) {
        if depth == 0 {
            return;
        }
        let label = self.label.flip();
        let board = &self.board;
        self.children = board
            .grid()
            .open_pairs()
            .into_par_iter()
            .map(|(a, b)| {
                let mut child = Node::played(board, label, a, b);
                child.generate_parallel(depth - 1);
                child
            })
            .collect();
    }
}
