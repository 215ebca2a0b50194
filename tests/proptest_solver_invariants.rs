//! Property-based invariant tests for the dual A* solver.
//!
//! 1. A board scrambled by a k-step walk solves in at most k moves, and the
//!    reported solution is a real path: one slide per step, initial through
//!    goal, length equal to moves() + 1
//! 2. Unsolvable scrambles report -1 moves and no solution
//! 3. On 2x2 boards the twin search agrees with the inversion-parity oracle

use npuzzle::board::{Board, Move};
use npuzzle::Solver;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn moves(max_len: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec((0usize..4).prop_map(|i| Move::ALL[i]), 0..max_len)
}

fn permutation(n: usize) -> impl Strategy<Value = Vec<u32>> {
    Just((0..(n * n) as u32).collect::<Vec<u32>>()).prop_shuffle()
}

fn walk(start: &Board, moves: &[Move]) -> (Board, usize) {
    let mut current = start.clone();
    let mut applied = 0;
    for &m in moves {
        if let Some(next) = current.slide(m) {
            current = next;
            applied += 1;
        }
    }
    (current, applied)
}

fn assert_valid_solution(initial: &Board, solver: &Solver) -> Result<(), TestCaseError> {
    let boards = solver.solution().expect("solvable board must have a solution");
    prop_assert_eq!(boards.len(), solver.moves() as usize + 1);
    prop_assert_eq!(boards.first(), Some(initial));
    prop_assert!(boards.last().unwrap().is_goal());
    for pair in boards.windows(2) {
        prop_assert!(pair[0].neighbors().any(|n| n == pair[1]));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scrambled_boards_solve_within_walk_length(steps in moves(10)) {
        let (initial, applied) = walk(&Board::goal(3), &steps);
        let solver = Solver::new(initial.clone());

        prop_assert!(solver.is_solvable());
        prop_assert!(solver.moves() >= 0);
        prop_assert!(solver.moves() as usize <= applied);
        assert_valid_solution(&initial, &solver)?;
    }

    #[test]
    fn unsolvable_scrambles_report_no_solution(steps in moves(6)) {
        // The goal's twin is unsolvable, and sliding keeps it that way.
        let (initial, _) = walk(&Board::goal(3).twin(), &steps);
        let solver = Solver::new(initial);

        prop_assert!(!solver.is_solvable());
        prop_assert_eq!(solver.moves(), -1);
        prop_assert_eq!(solver.solution(), None);
    }

    #[test]
    fn twin_search_agrees_with_parity_on_two_by_two(flat in permutation(2)) {
        let board = Board::from_grid(flat.chunks(2).map(|c| c.to_vec()).collect());
        let solver = Solver::new(board.clone());

        prop_assert_eq!(solver.is_solvable(), board.parity_solvable());
    }
}
