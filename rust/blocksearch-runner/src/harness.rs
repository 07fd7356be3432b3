//! Size sweep over the fixed three-tile world.
//!
//! Each size gets a fresh start/goal pair per algorithm. An algorithm that runs
//! out of resources is dropped for every later size of the run.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use blocksearch_core::{Algorithm, Board, BoardError, ResultSink, SearchEngine, SearchError, SearchNode, SearchOptions};

/// Start: A, B, C along the bottom row from the left, agent in the bottom-right
/// corner. Goal: the three tiles stacked in column 1, agent unchanged.
pub fn sized_world(n: i32) -> Result<(Board, Board), BoardError> {
    let start = Board::new(n, (0, n - 1), (1, n - 1), (2, n - 1), (n - 1, n - 1))?;
    let goal = Board::new(n, (1, n - 3), (1, n - 2), (1, n - 1), (n - 1, n - 1))?;
    Ok((start, goal))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmOutcome {
    Solved { depth: u32, nodes_visited: u64 },
    NoSolution,
    OutOfResources,
    Skipped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeReport {
    pub dimension: i32,
    pub outcomes: Vec<(Algorithm, AlgorithmOutcome)>,
}

impl SizeReport {
    pub fn outcome(&self, algorithm: Algorithm) -> Option<AlgorithmOutcome> {
        self.outcomes.iter().find(|(a, _)| *a == algorithm).map(|(_, o)| *o)
    }
}

pub struct Harness<S: ResultSink> {
    options: SearchOptions,
    sink: S,
    algorithms: Vec<Algorithm>,
    disabled: BTreeSet<Algorithm>,
}

impl<S: ResultSink> Harness<S> {
    pub fn new(options: SearchOptions, sink: S) -> Self {
        Self { options, sink, algorithms: Algorithm::DRIVER_ORDER.to_vec(), disabled: BTreeSet::new() }
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn disabled(&self) -> &BTreeSet<Algorithm> { &self.disabled }

    pub fn sink(&self) -> &S { &self.sink }

    pub fn into_sink(self) -> S { self.sink }

    pub fn run_size(&mut self, n: i32) -> Result<SizeReport> {
        let span = info_span!("size", dimension = n);
        let _enter = span.enter();
        let mut outcomes = Vec::with_capacity(self.algorithms.len());

        for algorithm in self.algorithms.clone() {
            if self.disabled.contains(&algorithm) {
                outcomes.push((algorithm, AlgorithmOutcome::Skipped));
                continue;
            }
            let (start, goal) = sized_world(n).with_context(|| format!("building the {n}x{n} world"))?;
            let start = Rc::new(SearchNode::root(start));
            let goal = SearchNode::root(goal);

            let result = SearchEngine::new(&mut self.sink, &self.options).run(algorithm, &start, &goal);
            let outcome = match result {
                Ok(found) => AlgorithmOutcome::Solved {
                    depth: found.record.depth,
                    nodes_visited: found.record.nodes_visited,
                },
                Err(SearchError::Exhausted { .. }) => AlgorithmOutcome::NoSolution,
                Err(err @ SearchError::ResourceExhausted { .. }) => {
                    warn!(%algorithm, error = %err, "out of resources; skipping it for larger sizes");
                    self.disabled.insert(algorithm);
                    AlgorithmOutcome::OutOfResources
                }
                Err(err @ SearchError::Sink(_)) => {
                    return Err(anyhow::Error::new(err).context(format!("writing the {algorithm} result for size {n}")));
                }
            };
            outcomes.push((algorithm, outcome));
        }
        Ok(SizeReport { dimension: n, outcomes })
    }

    pub fn run_sweep(&mut self, sizes: RangeInclusive<i32>) -> Result<Vec<SizeReport>> {
        let mut reports = Vec::new();
        for n in sizes {
            let report = self.run_size(n)?;
            info!(dimension = n, disabled = self.disabled.len(), "size done");
            reports.push(report);
        }
        Ok(reports)
    }
}
