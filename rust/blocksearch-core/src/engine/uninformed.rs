use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

use rustc_hash::FxHashSet;
use tracing::info_span;

use super::{exhausted, SearchEngine, SearchOutcome};
use crate::errors::SearchError;
use crate::metrics::{Algorithm, ResultSink};
use crate::node::SearchNode;

/// Pending nodes of an uninformed search; the pop order is the strategy.
trait Frontier {
    fn put(&mut self, node: Rc<SearchNode>);
    fn take(&mut self) -> Option<Rc<SearchNode>>;
}

impl Frontier for VecDeque<Rc<SearchNode>> {
    fn put(&mut self, node: Rc<SearchNode>) { self.push_back(node); }
    fn take(&mut self) -> Option<Rc<SearchNode>> { self.pop_front() }
}

impl Frontier for Vec<Rc<SearchNode>> {
    fn put(&mut self, node: Rc<SearchNode>) { self.push(node); }
    fn take(&mut self) -> Option<Rc<SearchNode>> { self.pop() }
}

impl<'a, S: ResultSink> SearchEngine<'a, S> {
    /// FIFO search; the first goal dequeued has minimal depth.
    pub fn breadth_first(&mut self, start: &Rc<SearchNode>, goal: &SearchNode) -> Result<SearchOutcome, SearchError> {
        self.graph_search(Algorithm::BreadthFirst, VecDeque::new(), start, goal)
    }

    /// LIFO search; finds some path, not necessarily a short one.
    pub fn depth_first(&mut self, start: &Rc<SearchNode>, goal: &SearchNode) -> Result<SearchOutcome, SearchError> {
        self.graph_search(Algorithm::DepthFirst, Vec::new(), start, goal)
    }

    // Nodes enter `visited` when first generated, not when dequeued.
    fn graph_search<F: Frontier>(
        &mut self,
        algorithm: Algorithm,
        mut frontier: F,
        start: &Rc<SearchNode>,
        goal: &SearchNode,
    ) -> Result<SearchOutcome, SearchError> {
        let span = info_span!("search", %algorithm, dimension = start.board().dimension());
        let _enter = span.enter();
        let started = Instant::now();
        let mut budget = self.budget(algorithm, start);

        let mut visited: FxHashSet<Rc<SearchNode>> = FxHashSet::default();
        budget.charge("visited", 1)?;
        visited.insert(Rc::clone(start));
        frontier.put(Rc::clone(start));

        while let Some(node) = frontier.take() {
            if node.board().matches_exact(goal.board()) {
                let seen = visited.len() as u64;
                return self.finish(algorithm, started, node, seen);
            }
            for child in node.expand() {
                if visited.contains(&child) {
                    continue;
                }
                budget.charge("visited", 1)?;
                visited.insert(Rc::clone(&child));
                frontier.put(child);
            }
        }
        Err(exhausted(algorithm, visited.len() as u64))
    }
}
