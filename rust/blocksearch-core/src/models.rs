use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid coordinate as `(x, y)`; `y` grows downwards.
pub type Cell = (i32, i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileLabel {
    A,
    B,
    C,
    Agent,
    Empty,
}

impl TileLabel {
    pub fn name(&self) -> &'static str {
        match self {
            TileLabel::A => "A",
            TileLabel::B => "B",
            TileLabel::C => "C",
            TileLabel::Agent => "X",
            TileLabel::Empty => "Empty",
        }
    }
}

impl fmt::Display for TileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// One grid cell occupant. Equality and ordering cover label and position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub label: TileLabel,
    pub x: i32,
    pub y: i32,
}

impl Tile {
    pub fn new(label: TileLabel, x: i32, y: i32) -> Self { Self { label, x, y } }

    pub fn cell(&self) -> Cell { (self.x, self.y) }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ({},{})", self.label, self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order used by every strategy.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn short(&self) -> &'static str {
        match self {
            Direction::Up => "U",
            Direction::Down => "D",
            Direction::Left => "L",
            Direction::Right => "R",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.short()) }
}
