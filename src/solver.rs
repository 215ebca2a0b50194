use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use tracing::debug;

use crate::board::Board;

/// One entry in a search frontier: a board, its path cost, and a link back
/// to the node it was expanded from.
///
/// `priority` is the A* key f = g + h with g the move count and h the
/// board's Manhattan distance, fixed at construction.
struct SearchNode {
    board: Board,
    moves: u32,
    priority: u32,
    previous: Option<Rc<SearchNode>>,
}

impl SearchNode {
    fn root(board: Board) -> Self {
        let priority = board.manhattan();
        Self {
            board,
            moves: 0,
            priority,
            previous: None,
        }
    }

    fn child(board: Board, previous: Rc<SearchNode>) -> Self {
        let moves = previous.moves + 1;
        let priority = board.manhattan() + moves;
        Self {
            board,
            moves,
            priority,
            previous: Some(previous),
        }
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for SearchNode {}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the lowest priority first. Equal
        // priorities are left to the heap's internal order.
        other.priority.cmp(&self.priority)
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* solver for the sliding puzzle.
///
/// Runs two searches in lockstep: one from the initial board and one from
/// its twin. Exactly one of the two can reach the goal, so whichever search
/// gets there first settles solvability and, for the original board, the
/// minimum move count.
pub struct Solver {
    result: Option<Rc<SearchNode>>,
}

impl Solver {
    /// Search eagerly; the result is fixed once construction returns.
    pub fn new(initial: Board) -> Self {
        let twin = initial.twin();

        let mut queue = BinaryHeap::new();
        let mut twin_queue = BinaryHeap::new();
        queue.push(Rc::new(SearchNode::root(initial)));
        twin_queue.push(Rc::new(SearchNode::root(twin)));

        let mut steps: u64 = 0;
        let result = loop {
            let (Some(node), Some(twin_node)) = (queue.pop(), twin_queue.pop()) else {
                // A frontier only drains if the board was not a valid
                // permutation to begin with.
                break None;
            };
            steps += 1;

            if node.board.is_goal() {
                break Some(node);
            }
            if twin_node.board.is_goal() {
                break None;
            }

            Self::expand(&node, &mut queue);
            Self::expand(&twin_node, &mut twin_queue);
        };

        debug!(
            "search finished after {} expansion rounds (solvable: {})",
            steps,
            result.is_some()
        );

        Self { result }
    }

    fn expand(node: &Rc<SearchNode>, queue: &mut BinaryHeap<Rc<SearchNode>>) {
        for neighbor in node.board.neighbors() {
            // Never re-admit the board this node was just expanded from.
            let back_step = node
                .previous
                .as_ref()
                .is_some_and(|prev| prev.board == neighbor);
            if !back_step {
                queue.push(Rc::new(SearchNode::child(neighbor, Rc::clone(node))));
            }
        }
    }

    pub fn is_solvable(&self) -> bool {
        self.result.is_some()
    }

    /// Minimum number of moves to solve the initial board, -1 if unsolvable.
    pub fn moves(&self) -> i32 {
        self.result.as_ref().map_or(-1, |node| node.moves as i32)
    }

    /// The boards of a shortest solution, initial through goal, or `None`
    /// if unsolvable.
    pub fn solution(&self) -> Option<Vec<Board>> {
        self.result.as_ref().map(|terminal| {
            let mut boards = Vec::with_capacity(terminal.moves as usize + 1);
            let mut current = Some(terminal);
            while let Some(node) = current {
                boards.push(node.board.clone());
                current = node.previous.as_ref();
            }
            boards.reverse();
            boards
        })
    }
}
