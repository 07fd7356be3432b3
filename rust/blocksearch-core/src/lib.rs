pub mod board;
pub mod engine;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod node;
pub mod options;
pub mod resources;

pub use board::Board;
pub use engine::{SearchEngine, SearchOutcome};
pub use errors::{BoardError, SearchError};
pub use metrics::{Algorithm, ResultSink, SearchRecord};
pub use models::{Cell, Direction, Tile, TileLabel};
pub use node::SearchNode;
pub use options::SearchOptions;
