//! Memory budget for a single search call.
//!
//! Heap exhaustion cannot be caught, so every strategy charges the approximate
//! footprint of each node it keeps (node header plus its filler grid) and
//! fails with [`SearchError::ResourceExhausted`] once the budget is spent.

use std::mem::size_of;

use crate::errors::SearchError;
use crate::metrics::Algorithm;
use crate::models::Tile;
use crate::node::SearchNode;

/// Bytes retained by one node of a `dimension`-sized board.
pub fn node_footprint(dimension: i32) -> u64 {
    let cells = (dimension.max(0) as u64).pow(2);
    size_of::<SearchNode>() as u64 + cells * size_of::<Tile>() as u64
}

#[derive(Debug, Clone)]
pub struct ResourceBudget {
    algorithm: Algorithm,
    limit: u64,
    per_node: u64,
    retained: u64,
}

impl ResourceBudget {
    pub fn new(algorithm: Algorithm, limit: u64, dimension: i32) -> Self {
        Self { algorithm, limit, per_node: node_footprint(dimension), retained: 0 }
    }

    pub fn charge(&mut self, stage: &'static str, nodes: u64) -> Result<(), SearchError> {
        self.retained = self.retained.saturating_add(nodes.saturating_mul(self.per_node));
        if self.retained > self.limit {
            return Err(SearchError::ResourceExhausted {
                algorithm: self.algorithm,
                stage,
                limit: self.limit,
                observed: self.retained,
            });
        }
        Ok(())
    }

    pub fn reset(&mut self) { self.retained = 0; }
}
