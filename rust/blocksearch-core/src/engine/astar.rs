use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::info_span;

use super::{exhausted, SearchEngine, SearchOutcome};
use crate::errors::SearchError;
use crate::metrics::{Algorithm, ResultSink};
use crate::node::SearchNode;

struct QueueEntry {
    node: Rc<SearchNode>,
    // Monotonic insertion counter; equal estimates pop first-in first-out
    seq: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}
impl Eq for QueueEntry {}
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is max-heap; invert ordering for min-heap behavior
        other.node.cmp_estimate(&self.node).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<'a, S: ResultSink> SearchEngine<'a, S> {
    /// Best-first search on `depth + tile_manhattan`.
    ///
    /// A child is queued only when its board is neither expanded nor already
    /// waiting in the frontier; queued entries are never re-prioritised.
    pub fn a_star(&mut self, start: &Rc<SearchNode>, goal: &SearchNode) -> Result<SearchOutcome, SearchError> {
        let algorithm = Algorithm::AStar;
        let span = info_span!("search", %algorithm, dimension = start.board().dimension());
        let _enter = span.enter();
        let started = Instant::now();
        let mut budget = self.budget(algorithm, start);

        let mut open: BinaryHeap<QueueEntry> = BinaryHeap::new();
        let mut in_open: FxHashSet<Rc<SearchNode>> = FxHashSet::default();
        let mut expanded: FxHashSet<Rc<SearchNode>> = FxHashSet::default();
        let mut seq: u64 = 0;

        start.estimate_cost_to(goal);
        budget.charge("open", 1)?;
        in_open.insert(Rc::clone(start));
        open.push(QueueEntry { node: Rc::clone(start), seq });

        while let Some(QueueEntry { node, .. }) = open.pop() {
            in_open.remove(&node);
            if node.board().matches_exact(goal.board()) {
                let seen = expanded.len() as u64;
                return self.finish(algorithm, started, node, seen);
            }
            expanded.insert(Rc::clone(&node));
            for child in node.expand() {
                if expanded.contains(&child) || in_open.contains(&child) {
                    continue;
                }
                child.estimate_cost_to(goal);
                seq += 1;
                budget.charge("open", 1)?;
                in_open.insert(Rc::clone(&child));
                open.push(QueueEntry { node: child, seq });
            }
        }
        Err(exhausted(algorithm, expanded.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::engine::tests::world;
    use crate::metrics::SearchRecord;
    use crate::options::SearchOptions;

    fn entry(node: &Rc<SearchNode>, seq: u64) -> QueueEntry { QueueEntry { node: Rc::clone(node), seq } }

    #[test]
    fn heap_pops_lowest_estimate_then_oldest() {
        let (start, goal) = world(4);
        let children = start.expand();
        let (up, left) = (&children[0], &children[1]);
        up.estimate_cost_to(&goal); // 6
        left.estimate_cost_to(&goal); // 7
        start.estimate_cost_to(&goal); // 5

        let mut heap = BinaryHeap::new();
        heap.push(entry(left, 0));
        heap.push(entry(up, 1));
        heap.push(entry(&start, 2));
        heap.push(entry(up, 3));
        let order: Vec<(u32, u64)> = std::iter::from_fn(|| heap.pop()).map(|e| (e.node.estimate(), e.seq)).collect();
        assert_eq!(order, vec![(5, 2), (6, 1), (6, 3), (7, 0)]);
    }

    #[test]
    fn solves_scenario_with_fewer_expansions_than_bfs() {
        let (start, goal) = world(4);
        let opts = SearchOptions::default();
        let mut engine = SearchEngine::new(Vec::<SearchRecord>::new(), &opts);
        let astar = engine.a_star(&start, &goal).unwrap();
        let bfs = engine.breadth_first(&start, &goal).unwrap();
        assert_eq!(astar.record.depth, 16);
        assert_eq!(astar.record.depth, bfs.record.depth);
        assert!(astar.record.nodes_visited < bfs.record.nodes_visited);
        // the terminal estimate is its depth: no tile is left to move
        assert_eq!(astar.node.estimate(), astar.node.depth());
    }

    #[test]
    fn unreachable_goal_exhausts() {
        let start = Rc::new(SearchNode::root(Board::new(2, (0, 0), (1, 0), (0, 1), (1, 1)).unwrap()));
        let goal = SearchNode::root(Board::new(2, (1, 0), (0, 0), (0, 1), (1, 1)).unwrap());
        let opts = SearchOptions::default();
        let mut engine = SearchEngine::new(Vec::<SearchRecord>::new(), &opts);
        match engine.a_star(&start, &goal) {
            Err(SearchError::Exhausted { algorithm, nodes_visited }) => {
                assert_eq!(algorithm, Algorithm::AStar);
                assert_eq!(nodes_visited, 12);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }
}
