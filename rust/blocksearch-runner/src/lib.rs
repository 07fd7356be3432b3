pub mod config;
pub mod harness;
pub mod sink;

pub use harness::{sized_world, AlgorithmOutcome, Harness, SizeReport};
pub use sink::{CsvSink, JsonLinesSink, ResultFormat, ResultWriter};
