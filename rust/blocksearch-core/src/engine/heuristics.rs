use crate::board::Board;

/// Sum of Manhattan distances of A, B and C to their goal cells.
///
/// The agent is left out: a single move displaces at most one tracked tile by
/// one cell, so this never overestimates and changes by at most one per move.
pub fn tile_manhattan(board: &Board, goal: &Board) -> u32 {
    let here = board.positions();
    let there = goal.positions();
    here[..3]
        .iter()
        .zip(&there[..3])
        .map(|(&(x, y), &(gx, gy))| (x - gx).unsigned_abs() + (y - gy).unsigned_abs())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    #[test]
    fn ignores_agent_position() {
        let a = Board::new(4, (0, 3), (1, 3), (2, 3), (3, 3)).unwrap();
        let b = Board::new(4, (0, 3), (1, 3), (2, 3), (0, 0)).unwrap();
        assert_eq!(tile_manhattan(&a, &b), 0);
    }

    #[test]
    fn sums_tile_distances() {
        let start = Board::new(4, (0, 3), (1, 3), (2, 3), (3, 3)).unwrap();
        let goal = Board::new(4, (1, 1), (1, 2), (1, 3), (3, 3)).unwrap();
        // A: 1+2, B: 0+1, C: 1+0
        assert_eq!(tile_manhattan(&start, &goal), 5);
    }

    #[test]
    fn changes_by_at_most_one_per_move() {
        let goal = Board::new(4, (1, 1), (1, 2), (1, 3), (3, 3)).unwrap();
        let board = Board::new(4, (2, 2), (1, 2), (2, 1), (2, 3)).unwrap();
        let h = tile_manhattan(&board, &goal) as i64;
        for d in Direction::ALL {
            let mut next = board.clone();
            if next.apply_move(d) {
                let h2 = tile_manhattan(&next, &goal) as i64;
                assert!((h - h2).abs() <= 1, "move {d} changed h from {h} to {h2}");
            }
        }
    }
}
