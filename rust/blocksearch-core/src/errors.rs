use thiserror::Error;

use crate::metrics::Algorithm;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("{algorithm} exhausted the search space after {nodes_visited} nodes without reaching the goal")]
    Exhausted { algorithm: Algorithm, nodes_visited: u64 },
    #[error("{algorithm} ran out of resources at {stage}: {observed} bytes retained (limit {limit})")]
    ResourceExhausted {
        algorithm: Algorithm,
        stage: &'static str,
        limit: u64,
        observed: u64,
    },
    #[error("failed to record search result")]
    Sink(#[from] std::io::Error),
}

impl SearchError {
    pub fn is_resource_exhausted(&self) -> bool { matches!(self, SearchError::ResourceExhausted { .. }) }

    pub fn is_exhausted(&self) -> bool { matches!(self, SearchError::Exhausted { .. }) }
}
