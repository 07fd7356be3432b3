use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "BFS")]
    BreadthFirst,
    #[serde(rename = "DFS")]
    DepthFirst,
    #[serde(rename = "IDS")]
    IterativeDeepening,
    #[serde(rename = "A*")]
    AStar,
}

impl Algorithm {
    /// Order the sweep driver runs strategies in.
    pub const DRIVER_ORDER: [Algorithm; 4] =
        [Algorithm::AStar, Algorithm::BreadthFirst, Algorithm::DepthFirst, Algorithm::IterativeDeepening];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "BFS",
            Algorithm::DepthFirst => "DFS",
            Algorithm::IterativeDeepening => "IDS",
            Algorithm::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            "dfs" | "depth-first" => Ok(Algorithm::DepthFirst),
            "ids" | "iterative-deepening" => Ok(Algorithm::IterativeDeepening),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            other => Err(format!("unknown algorithm '{other}' (expected bfs, dfs, ids or astar)")),
        }
    }
}

/// One line of the results artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub algorithm: Algorithm,
    pub dimension: i32,
    pub depth: u32,
    pub nodes_visited: u64,
    pub elapsed_ms: f64,
}

impl SearchRecord {
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{:.1}",
            self.algorithm, self.dimension, self.depth, self.nodes_visited, self.elapsed_ms
        )
    }
}

/// Receives one record per successful search.
pub trait ResultSink {
    fn record(&mut self, record: &SearchRecord) -> io::Result<()>;
}

impl ResultSink for Vec<SearchRecord> {
    fn record(&mut self, record: &SearchRecord) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn record(&mut self, record: &SearchRecord) -> io::Result<()> { (**self).record(record) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn record() -> SearchRecord {
        SearchRecord { algorithm: Algorithm::AStar, dimension: 4, depth: 16, nodes_visited: 765, elapsed_ms: 3.0 }
    }

    #[test]
    fn csv_line_has_no_header_or_quoting() {
        assert_eq!(record().csv_line(), "A*,4,16,765,3.0");
        let r = SearchRecord { algorithm: Algorithm::IterativeDeepening, elapsed_ms: 12.345, ..record() };
        assert_eq!(r.csv_line(), "IDS,4,16,765,12.3");
    }

    #[test]
    fn record_serializes_with_short_names() {
        let v = serde_json::to_value(record()).unwrap();
        assert_eq!(v["algorithm"], Value::String("A*".into()));
        assert_eq!(v["nodes_visited"], Value::from(765));
    }

    #[test]
    fn parses_algorithm_names() {
        assert_eq!("BFS".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert_eq!("a*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("Ids".parse::<Algorithm>(), Ok(Algorithm::IterativeDeepening));
        assert!("greedy".parse::<Algorithm>().is_err());
        for a in Algorithm::DRIVER_ORDER {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn vec_sink_collects_records() {
        let mut sink: Vec<SearchRecord> = Vec::new();
        sink.record(&record()).unwrap();
        (&mut sink).record(&record()).unwrap();
        assert_eq!(sink.len(), 2);
    }
}
