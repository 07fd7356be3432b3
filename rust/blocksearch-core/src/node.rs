use std::cell::Cell;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter;
use std::rc::Rc;

use crate::board::Board;
use crate::engine::heuristics::tile_manhattan;
use crate::models::Direction;

/// Cost charged per agent move.
pub const STEP_COST: u32 = 2;

/// A board plus its derivation in the search tree.
///
/// Equality and hashing delegate to the board, so two nodes reaching the same
/// configuration are interchangeable in visited sets. The heuristic estimate
/// is not part of equality and is only meaningful for the goal it was last
/// computed against.
#[derive(Debug)]
pub struct SearchNode {
    parent: Option<Rc<SearchNode>>,
    board: Board,
    path_cost: u32,
    depth: u32,
    direction: Option<Direction>,
    estimate: Cell<u32>,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        Self { parent: None, board, path_cost: 0, depth: 0, direction: None, estimate: Cell::new(0) }
    }

    pub fn child(parent: &Rc<SearchNode>, board: Board, direction: Direction) -> Self {
        Self {
            parent: Some(Rc::clone(parent)),
            board,
            path_cost: parent.path_cost + STEP_COST,
            depth: parent.depth + 1,
            direction: Some(direction),
            estimate: Cell::new(0),
        }
    }

    pub fn parent(&self) -> Option<&Rc<SearchNode>> { self.parent.as_ref() }
    pub fn board(&self) -> &Board { &self.board }
    pub fn path_cost(&self) -> u32 { self.path_cost }
    pub fn depth(&self) -> u32 { self.depth }
    pub fn direction(&self) -> Option<Direction> { self.direction }
    pub fn estimate(&self) -> u32 { self.estimate.get() }

    /// One child per direction the agent can take, in `Direction::ALL` order.
    pub fn expand(self: &Rc<Self>) -> Vec<Rc<SearchNode>> {
        let mut children = Vec::with_capacity(Direction::ALL.len());
        for direction in Direction::ALL {
            if !self.board.can_move(direction) {
                continue;
            }
            let mut child = SearchNode::child(self, self.board.respawn(), direction);
            let moved = child.board.apply_move(direction);
            debug_assert!(moved, "bounds were checked before moving {direction}");
            children.push(Rc::new(child));
        }
        children
    }

    /// Stores and returns `tile_manhattan(goal) + depth`.
    ///
    /// Depth counts one per move while `path_cost` counts two; the estimate
    /// deliberately mixes the two units.
    pub fn estimate_cost_to(&self, goal: &SearchNode) -> u32 {
        let value = tile_manhattan(&self.board, &goal.board) + self.depth;
        self.estimate.set(value);
        value
    }

    /// Priority order for best-first frontiers: lower estimate first.
    pub fn cmp_estimate(&self, other: &SearchNode) -> Ordering { self.estimate().cmp(&other.estimate()) }

    pub fn ancestors(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        iter::successors(Some(self), |n| n.parent.as_deref())
    }

    /// Moves from the root to this node.
    pub fn solution_path(&self) -> Vec<Direction> {
        let mut path: Vec<Direction> = self.ancestors().filter_map(|n| n.direction).collect();
        path.reverse();
        path
    }
}

// Depth-first paths can be tens of thousands of nodes long; unlink the
// parent chain iteratively so dropping a leaf never recurses that deep.
impl Drop for SearchNode {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(rc) = next {
            next = match Rc::try_unwrap(rc) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool { self.board == other.board }
}
impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) { self.board.hash(state); }
}
