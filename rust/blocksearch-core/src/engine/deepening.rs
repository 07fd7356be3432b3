use std::rc::Rc;
use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::{debug, info_span};

use super::{exhausted, SearchEngine, SearchOutcome};
use crate::errors::SearchError;
use crate::metrics::{Algorithm, ResultSink};
use crate::node::SearchNode;
use crate::resources::ResourceBudget;

/// Result of one bounded pass.
struct Pass {
    found: Option<Rc<SearchNode>>,
    seen: u64,
}

impl<'a, S: ResultSink> SearchEngine<'a, S> {
    /// Depth-bounded DFS repeated with bounds 1, 2, 3, ...
    ///
    /// The reported node count is the sum of the depth-map sizes of the passes
    /// that missed the goal, accumulated for this call only. Without `ids_max_depth` the loop only
    /// ends at a goal or when the memory budget runs out.
    pub fn iterative_deepening(&mut self, start: &Rc<SearchNode>, goal: &SearchNode) -> Result<SearchOutcome, SearchError> {
        let algorithm = Algorithm::IterativeDeepening;
        let span = info_span!("search", %algorithm, dimension = start.board().dimension());
        let _enter = span.enter();
        let started = Instant::now();
        let mut budget = self.budget(algorithm, start);
        let mut total: u64 = 0;
        let mut bound: u32 = 1;

        loop {
            if self.options.ids_max_depth.is_some_and(|max| bound > max) {
                return Err(exhausted(algorithm, total));
            }
            budget.reset();
            let pass = depth_limited(start, goal, bound, &mut budget)?;
            if let Some(node) = pass.found {
                debug!(bound, seen = pass.seen, total, "goal found");
                return self.finish(algorithm, started, node, total);
            }
            total += pass.seen;
            debug!(bound, seen = pass.seen, total, "deepening pass done");
            bound += 1;
        }
    }
}

// A child is pushed when its board is new to this pass, or was recorded at a
// depth no shallower than the child's own.
fn depth_limited(start: &Rc<SearchNode>, goal: &SearchNode, bound: u32, budget: &mut ResourceBudget) -> Result<Pass, SearchError> {
    let mut stack: Vec<Rc<SearchNode>> = vec![Rc::clone(start)];
    let mut best_depth: FxHashMap<Rc<SearchNode>, u32> = FxHashMap::default();
    budget.charge("depth-map", 1)?;
    best_depth.insert(Rc::clone(start), start.depth());

    while let Some(node) = stack.pop() {
        if node.board().matches_exact(goal.board()) {
            return Ok(Pass { found: Some(node), seen: best_depth.len() as u64 });
        }
        if node.depth() >= bound {
            continue;
        }
        for child in node.expand() {
            let admit = best_depth.get(&child).map_or(true, |&recorded| recorded >= child.depth());
            if admit {
                budget.charge("stack", 1)?;
                best_depth.insert(Rc::clone(&child), child.depth());
                stack.push(child);
            }
        }
    }
    Ok(Pass { found: None, seen: best_depth.len() as u64 })
}
