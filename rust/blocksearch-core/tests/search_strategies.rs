use std::rc::Rc;

use blocksearch_core::{Algorithm, Board, SearchEngine, SearchNode, SearchOptions, SearchRecord};

fn world(n: i32) -> (Rc<SearchNode>, SearchNode) {
    let start = Board::new(n, (0, n - 1), (1, n - 1), (2, n - 1), (n - 1, n - 1)).expect("start board");
    let goal = Board::new(n, (1, n - 3), (1, n - 2), (1, n - 1), (n - 1, n - 1)).expect("goal board");
    (Rc::new(SearchNode::root(start)), SearchNode::root(goal))
}

fn replay(start: &SearchNode, node: &SearchNode) -> Board {
    let mut board = start.board().clone();
    for d in node.solution_path() {
        assert!(board.apply_move(d), "illegal move {d} in solution");
    }
    board
}

#[test]
fn scenario_4x4_bfs_and_astar_agree() {
    let (start, goal) = world(4);
    let opts = SearchOptions::default();
    let mut engine = SearchEngine::new(Vec::<SearchRecord>::new(), &opts);

    let bfs = engine.breadth_first(&start, &goal).expect("bfs solves 4x4");
    assert!(bfs.record.depth > 0);
    assert!(bfs.record.nodes_visited > 0);
    assert_eq!(bfs.record.depth, 16);

    let first = engine.a_star(&start, &goal).expect("a* solves 4x4");
    let again = engine.a_star(&start, &goal).expect("a* solves 4x4 again");
    assert_eq!(first.record.depth, bfs.record.depth);
    assert_eq!(again.record.depth, first.record.depth);
    assert_eq!(again.record.nodes_visited, first.record.nodes_visited);
    assert_eq!(engine.sink().len(), 3);
}

#[test]
fn iterative_deepening_matches_bfs_depth() {
    let (start, goal) = world(4);
    let opts = SearchOptions::default();
    let mut engine = SearchEngine::new(Vec::<SearchRecord>::new(), &opts);
    let bfs = engine.breadth_first(&start, &goal).unwrap();
    let ids = engine.iterative_deepening(&start, &goal).unwrap();
    assert_eq!(ids.record.depth, bfs.record.depth);
    assert_eq!(ids.record.algorithm, Algorithm::IterativeDeepening);
    // every pass revisits the start, so the running total outgrows any one pass
    assert!(ids.record.nodes_visited > u64::from(ids.record.depth));
}

#[test]
fn every_solution_replays_to_the_goal() {
    let (start, goal) = world(5);
    let opts = SearchOptions::default();
    let mut engine = SearchEngine::new(Vec::<SearchRecord>::new(), &opts);
    for algorithm in [Algorithm::AStar, Algorithm::BreadthFirst, Algorithm::DepthFirst] {
        let out = engine.run(algorithm, &start, &goal).unwrap();
        let end = replay(&start, &out.node);
        assert!(end.matches_exact(goal.board()), "{algorithm} path does not reach the goal");
        assert_eq!(out.node.solution_path().len() as u32, out.record.depth);
        assert_eq!(out.node.path_cost(), 2 * out.record.depth);
    }

    let (start, goal) = world(4);
    let ids = engine.iterative_deepening(&start, &goal).unwrap();
    assert!(replay(&start, &ids.node).matches_exact(goal.board()));
    assert_eq!(ids.node.solution_path().len() as u32, ids.record.depth);
}

#[test]
fn dfs_is_no_shorter_than_bfs() {
    let (start, goal) = world(4);
    let opts = SearchOptions::default();
    let mut engine = SearchEngine::new(Vec::<SearchRecord>::new(), &opts);
    let bfs = engine.breadth_first(&start, &goal).unwrap();
    let dfs = engine.depth_first(&start, &goal).unwrap();
    assert!(dfs.record.depth >= bfs.record.depth);
}

#[test]
fn optimal_strategies_agree_on_random_nearby_goals() {
    // Goals a handful of moves away from the 5x5 start, picked by a fixed walk.
    let (start, _) = world(5);
    let walks: [&[usize]; 4] = [&[0, 1], &[1, 2, 0], &[0, 2, 2, 1, 0], &[1, 0, 3, 2, 2, 0]];
    let opts = SearchOptions::default();
    for walk in walks {
        let mut node = Rc::clone(&start);
        for &i in walk {
            let children = node.expand();
            node = Rc::clone(&children[i % children.len()]);
        }
        let goal = SearchNode::root(node.board().clone());
        let mut engine = SearchEngine::new(Vec::<SearchRecord>::new(), &opts);
        let bfs = engine.breadth_first(&start, &goal).unwrap().record.depth;
        let astar = engine.a_star(&start, &goal).unwrap().record.depth;
        let ids = engine.iterative_deepening(&start, &goal).unwrap().record.depth;
        assert!(bfs <= walk.len() as u32);
        assert_eq!(astar, bfs, "walk {walk:?}");
        assert_eq!(ids, bfs, "walk {walk:?}");
    }
}
