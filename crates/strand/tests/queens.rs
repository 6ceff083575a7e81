//! An eight-level backtracking search built entirely out of the engine's
//! combinators: candidate rows come from a bounded span, conflicts are
//! detected with zip + map + any over the partial board, and the recursive
//! expansion is flattened with a fold.

use strand::{stage, Cursor, Slice, Span, Unbounded};

const BOARD: usize = 8;

/// Test if two rows conflict at the given column distance.
fn threatens(placed: i64, row: i64, distance: i64) -> bool {
    let diff = placed - row;
    diff == 0 || diff == distance || diff == -distance
}

/// Test if the most recently placed row is compatible with the rest of the
/// board. New rows are pushed at the front, so the column distance to each
/// earlier row is its position in the tail.
fn legal(board: &[u8]) -> bool {
    let (head, tail) = match board.split_first() {
        Some(split) => split,
        None => return true,
    };

    let head = i64::from(*head);
    let conflict = Unbounded::new(1i64)
        .zip(Slice::new(tail))
        .map(|p| threatens(head, i64::from(*p.second), p.first))
        .pipe(stage::any());

    !conflict
}

fn search(board: Vec<u8>) -> Vec<Vec<u8>> {
    if board.len() == BOARD {
        return vec![board];
    }

    Span::new(0u8, BOARD as u8)
        .map(|row| {
            let mut next = Vec::with_capacity(board.len() + 1);
            next.push(row);
            next.extend_from_slice(&board);
            next
        })
        .filter(|candidate| legal(candidate))
        .map(search)
        .pipe(stage::fold(Vec::new(), |mut all: Vec<Vec<u8>>, found: Vec<Vec<u8>>| {
            all.extend(found);
            all
        }))
}

#[test]
fn the_eight_queens_search_finds_all_ninety_two_solutions() {
    let solutions = search(Vec::new());

    assert_eq!(solutions.len(), 92);
    assert_eq!(solutions[0], vec![3, 1, 6, 2, 5, 7, 4, 0]);
    assert_eq!(solutions[1], vec![4, 1, 3, 6, 2, 7, 5, 0]);
    assert_eq!(solutions[90], vec![3, 6, 4, 1, 5, 0, 2, 7]);
    assert_eq!(solutions[91], vec![4, 6, 1, 5, 2, 0, 3, 7]);
}

#[test]
fn every_solution_is_a_permutation_of_the_rows() {
    for solution in search(Vec::new()) {
        let mut rows = solution.clone();
        rows.sort_unstable();
        assert_eq!(rows, (0..BOARD as u8).collect::<Vec<u8>>());
    }
}
