use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use tile_solver::{
    breadth_first, heuristic, moves_from_path, parse_board, search, solve, Board, Direction,
};

fn random_walk(from: &Board, steps: usize, rng: &mut StdRng) -> Board {
    let mut board = from.clone();
    for _ in 0..steps {
        let next = board.successors();
        board = next.choose(rng).unwrap().clone();
    }
    board
}

#[test]
fn matches_breadth_first_distance() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for size in [2, 3] {
        let goal = Board::goal(size).unwrap();
        for _ in 0..15 {
            let steps = rng.gen_range(0..30);
            let start = random_walk(&goal, steps, &mut rng);

            let astar = solve(&start, &goal).unwrap().unwrap();
            let reference = breadth_first(&start, &goal).unwrap().unwrap();
            assert_eq!(astar.len(), reference.len(), "start:\n{}", start);
        }
    }
}

#[test]
fn arbitrary_goals_are_supported() {
    let mut rng = StdRng::seed_from_u64(7);
    let base = Board::goal(3).unwrap();

    for _ in 0..10 {
        let goal = random_walk(&base, 25, &mut rng);
        let start = random_walk(&goal, 15, &mut rng);

        let path = solve(&start, &goal).unwrap().unwrap();
        let reference = breadth_first(&start, &goal).unwrap().unwrap();
        assert_eq!(path.len(), reference.len());
        assert_eq!(path.last(), Some(&goal));
    }
}

#[test]
fn heuristic_never_overestimates() {
    let mut rng = StdRng::seed_from_u64(42);
    let goal = Board::goal(3).unwrap();

    for _ in 0..30 {
        let steps = rng.gen_range(0..24);
        let state = random_walk(&goal, steps, &mut rng);
        let distance = breadth_first(&state, &goal).unwrap().unwrap().len() - 1;
        assert!(heuristic(&state, &goal) as usize <= distance);
    }
}

#[test]
fn repeated_solves_are_identical() {
    let start = parse_board("8 1 3\n4 _ 2\n7 6 5").unwrap();
    let goal = Board::goal(3).unwrap();

    let first = search(&start, &goal).unwrap();
    for _ in 0..5 {
        assert_eq!(search(&start, &goal).unwrap(), first);
    }
    assert_eq!(first.path.unwrap().len() - 1, 14);
}

#[test]
fn replaying_moves_reaches_the_goal() {
    let mut rng = StdRng::seed_from_u64(99);
    let goal = Board::goal(4).unwrap();

    for _ in 0..5 {
        let start = random_walk(&goal, 20, &mut rng);
        let path = solve(&start, &goal).unwrap().unwrap();
        let moves = moves_from_path(&path);
        assert_eq!(moves.len(), path.len() - 1);

        let mut board = start.clone();
        for (mv, expected) in moves.iter().zip(&path[1..]) {
            assert!(mv.direction().is_some());
            board = board.apply(mv).unwrap();
            assert_eq!(&board, expected);
        }
        assert_eq!(board, goal);
    }
}

#[test]
fn swapping_two_tiles_makes_the_goal_unreachable() {
    let goal = Board::goal(3).unwrap();
    for text in ["2 1 3\n4 5 6\n7 8 _", "1 2 3\n4 5 6\n8 7 _"] {
        let start = parse_board(text).unwrap();
        assert_eq!(solve(&start, &goal).unwrap(), None);
    }

    let goal = Board::goal(2).unwrap();
    for text in ["2 1\n3 _", "3 2\n1 _", "1 3\n2 _"] {
        let start = parse_board(text).unwrap();
        assert_eq!(solve(&start, &goal).unwrap(), None);
        assert_eq!(breadth_first(&start, &goal).unwrap(), None);
    }
}

#[test]
fn solves_on_a_worker_thread() {
    let start = parse_board("4 1 3\n_ 2 6\n7 5 8").unwrap();
    let goal = Board::goal(3).unwrap();

    let worker = std::thread::spawn(move || solve(&start, &goal));
    let path = worker.join().unwrap().unwrap().unwrap();
    assert_eq!(path.len() - 1, 5);
}

#[test]
fn hardest_eight_puzzle() {
    let start = parse_board("8 6 7\n2 5 4\n3 _ 1").unwrap();
    let goal = Board::goal(3).unwrap();

    let path = solve(&start, &goal).unwrap().unwrap();
    assert_eq!(path.len() - 1, 31);
    assert!(path.last().unwrap().is_solved());
}

#[test]
fn blank_moves_right_into_place() {
    let start = Board::new(vec![
        vec![Some(1), Some(2), Some(3)],
        vec![Some(4), Some(5), Some(6)],
        vec![Some(7), None, Some(8)],
    ])
    .unwrap();
    let goal = Board::new(vec![
        vec![Some(1), Some(2), Some(3)],
        vec![Some(4), Some(5), Some(6)],
        vec![Some(7), Some(8), None],
    ])
    .unwrap();

    let moves = moves_from_path(&solve(&start, &goal).unwrap().unwrap());
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].direction(), Some(Direction::Right));
}
