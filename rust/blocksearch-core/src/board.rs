use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::BoardError;
use crate::models::{Cell, Direction, Tile, TileLabel};

/// Largest grid side accepted by [`Board::new`].
pub const MAX_DIMENSION: i32 = 4096;

/// One configuration of the blocks world.
///
/// The grid is always fully populated: every cell not holding A, B, C or the
/// agent holds an `Empty` filler tile. Equality and hashing only look at the
/// four tracked positions, never at the filler grid.
#[derive(Clone, Debug)]
pub struct Board {
    dimension: i32,
    a: Tile,
    b: Tile,
    c: Tile,
    agent: Tile,
    // Column-major: index = x * dimension + y
    grid: Vec<Tile>,
}

impl Board {
    pub fn new(dimension: i32, a: Cell, b: Cell, c: Cell, agent: Cell) -> Result<Self, BoardError> {
        if dimension > MAX_DIMENSION {
            return Err(BoardError::InvalidConfiguration(format!(
                "dimension {dimension} exceeds the largest supported grid ({MAX_DIMENSION})"
            )));
        }
        let max = dimension - 1;
        let placed = [(TileLabel::A, a), (TileLabel::B, b), (TileLabel::C, c), (TileLabel::Agent, agent)];
        for (label, (x, y)) in placed {
            if x < 0 || y < 0 || x > max || y > max {
                return Err(BoardError::InvalidConfiguration(format!(
                    "tile {label} at ({x},{y}) is outside the grid; coordinates must lie in 0..={max}"
                )));
            }
        }
        if a == b || b == c || a == c {
            return Err(BoardError::InvalidConfiguration(
                "tiles A, B and C must occupy different cells".to_string(),
            ));
        }
        if agent == a || agent == b || agent == c {
            return Err(BoardError::InvalidConfiguration(format!(
                "agent at ({},{}) shares a cell with a tile",
                agent.0, agent.1
            )));
        }
        Ok(Self::populate(dimension, a, b, c, agent))
    }

    // Callers guarantee the cells are valid.
    fn populate(dimension: i32, a: Cell, b: Cell, c: Cell, agent: Cell) -> Self {
        let side = dimension as usize;
        let mut grid = Vec::with_capacity(side * side);
        for x in 0..dimension {
            for y in 0..dimension {
                grid.push(Tile::new(TileLabel::Empty, x, y));
            }
        }
        let mut board = Board {
            dimension,
            a: Tile::new(TileLabel::A, a.0, a.1),
            b: Tile::new(TileLabel::B, b.0, b.1),
            c: Tile::new(TileLabel::C, c.0, c.1),
            agent: Tile::new(TileLabel::Agent, agent.0, agent.1),
            grid,
        };
        for tile in [board.a, board.b, board.c, board.agent] {
            let i = board.index(tile.x, tile.y);
            board.grid[i] = tile;
        }
        board
    }

    /// Fresh board from the tracked coordinates only.
    pub fn respawn(&self) -> Self {
        Self::populate(self.dimension, self.a.cell(), self.b.cell(), self.c.cell(), self.agent.cell())
    }

    pub fn dimension(&self) -> i32 { self.dimension }

    pub fn agent(&self) -> &Tile { &self.agent }

    pub fn tile(&self, label: TileLabel) -> Option<&Tile> {
        match label {
            TileLabel::A => Some(&self.a),
            TileLabel::B => Some(&self.b),
            TileLabel::C => Some(&self.c),
            TileLabel::Agent => Some(&self.agent),
            TileLabel::Empty => None,
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) { self.grid.get(self.index(x, y)) } else { None }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ { self.grid.iter() }

    /// Tracked cells in A, B, C, agent order.
    pub fn positions(&self) -> [Cell; 4] {
        [self.a.cell(), self.b.cell(), self.c.cell(), self.agent.cell()]
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        let (dx, dy) = direction.offset();
        self.in_bounds(self.agent.x + dx, self.agent.y + dy)
    }

    /// Swaps the agent with whatever occupies the neighbouring cell.
    ///
    /// Returns `false` and leaves the board untouched when the agent is
    /// already on that boundary.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if !self.can_move(direction) {
            return false;
        }
        let (dx, dy) = direction.offset();
        let (ax, ay) = self.agent.cell();
        let (nx, ny) = (ax + dx, ay + dy);
        let from = self.index(ax, ay);
        let to = self.index(nx, ny);

        self.grid.swap(from, to);
        self.grid[from].x = ax;
        self.grid[from].y = ay;
        self.grid[to].x = nx;
        self.grid[to].y = ny;

        let displaced = self.grid[from];
        match displaced.label {
            TileLabel::A => self.a = displaced,
            TileLabel::B => self.b = displaced,
            TileLabel::C => self.c = displaced,
            TileLabel::Agent | TileLabel::Empty => {}
        }
        self.agent = self.grid[to];
        true
    }

    /// Goal test: all four tracked positions agree.
    pub fn matches_exact(&self, goal: &Board) -> bool { self.positions() == goal.positions() }

    /// Alternate goal test that lets the agent finish anywhere.
    pub fn matches_tiles_only(&self, goal: &Board) -> bool {
        self.positions()[..3] == goal.positions()[..3]
    }

    /// Multi-line grid picture, `.` for filler cells.
    pub fn render(&self) -> String {
        let side = self.dimension as usize;
        let mut out = String::with_capacity(side * (side + 1));
        for y in 0..self.dimension {
            for x in 0..self.dimension {
                let ch = match self.grid[self.index(x, y)].label {
                    TileLabel::A => 'A',
                    TileLabel::B => 'B',
                    TileLabel::C => 'C',
                    TileLabel::Agent => 'X',
                    TileLabel::Empty => '.',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.dimension && y < self.dimension
    }

    // Only called with in-bounds coordinates, so every factor is non-negative.
    fn index(&self, x: i32, y: i32) -> usize { x as usize * self.dimension as usize + y as usize }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool { self.positions() == other.positions() }
}
impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) { self.positions().hash(state); }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, Agent ({}) - ({},{})", self.a, self.b, self.c, self.agent.label, self.agent.x, self.agent.y)
    }
}
