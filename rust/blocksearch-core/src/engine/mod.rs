pub mod astar;
pub mod deepening;
pub mod heuristics;
pub mod uninformed;

use std::rc::Rc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::errors::SearchError;
use crate::metrics::{Algorithm, ResultSink, SearchRecord};
use crate::node::SearchNode;
use crate::options::SearchOptions;
use crate::resources::ResourceBudget;

pub use heuristics::tile_manhattan;

/// Terminal node of a successful search and the record sent to the sink.
#[derive(Debug)]
pub struct SearchOutcome {
    pub node: Rc<SearchNode>,
    pub record: SearchRecord,
}

/// Runs the four strategies against start/goal pairs and reports each
/// successful search to `sink`. Every call allocates its own frontier and
/// visited structures; nothing carries over between calls.
pub struct SearchEngine<'a, S: ResultSink> {
    sink: S,
    options: &'a SearchOptions,
}

impl<'a, S: ResultSink> SearchEngine<'a, S> {
    pub fn new(sink: S, options: &'a SearchOptions) -> Self { Self { sink, options } }

    pub fn sink(&self) -> &S { &self.sink }

    pub fn into_sink(self) -> S { self.sink }

    pub fn run(&mut self, algorithm: Algorithm, start: &Rc<SearchNode>, goal: &SearchNode) -> Result<SearchOutcome, SearchError> {
        match algorithm {
            Algorithm::BreadthFirst => self.breadth_first(start, goal),
            Algorithm::DepthFirst => self.depth_first(start, goal),
            Algorithm::IterativeDeepening => self.iterative_deepening(start, goal),
            Algorithm::AStar => self.a_star(start, goal),
        }
    }

    fn budget(&self, algorithm: Algorithm, start: &SearchNode) -> ResourceBudget {
        ResourceBudget::new(algorithm, self.options.max_retained_bytes, start.board().dimension())
    }

    fn finish(&mut self, algorithm: Algorithm, started: Instant, node: Rc<SearchNode>, nodes_visited: u64) -> Result<SearchOutcome, SearchError> {
        let record = SearchRecord {
            algorithm,
            dimension: node.board().dimension(),
            depth: node.depth(),
            nodes_visited,
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        info!(depth = record.depth, path_cost = node.path_cost(), nodes_visited, elapsed_ms = record.elapsed_ms, "search complete");
        debug!(path = %format_path(&node), board = %node.board().render(), "solution");
        self.sink.record(&record)?;
        Ok(SearchOutcome { node, record })
    }
}

fn exhausted(algorithm: Algorithm, nodes_visited: u64) -> SearchError {
    warn!(%algorithm, nodes_visited, "search failed: no solution found");
    SearchError::Exhausted { algorithm, nodes_visited }
}

fn format_path(node: &SearchNode) -> String {
    node.solution_path().iter().map(|d| d.short()).collect::<Vec<_>>().join(",")
}
