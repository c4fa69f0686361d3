//! Forbidden-point resolution for Black
//!
//! A three only counts toward a double-three if it can still grow into a
//! straight four. Whether it can depends on its completion points: a
//! completion point that is taken by White, lies off the board, or would
//! itself be a forbidden move for Black cannot be used. Deciding the last
//! case means classifying a hypothetical stone, which may in turn find threes
//! whose completion points need resolving, so the check is recursive.
//!
//! Every level places Black on a cell that was empty before, so the
//! recursion never goes deeper than the number of intersections.

use log::trace;

use crate::board::{Board, Orientation, Pos, Stone, TOTAL_CELLS};

use super::counter::classify_at_depth;
use super::patterns::ThreeShape;

/// Decide whether a matched three can still become a straight four.
///
/// The four completion points come from `shape.offsets`, projected from
/// `anchor` along `orientation`. For a split three (`offsets[0] == 0`) the
/// single gap must be usable and neither extension may be forbidden. For a
/// solid three at least one side must have both of its points usable.
pub(crate) fn three_is_live(
    board: &mut Board,
    anchor: Pos,
    orientation: Orientation,
    shape: &ThreeShape,
    depth: usize,
) -> bool {
    let [p0, p1, p2, p3] = shape.offsets.map(|o| orientation.project(anchor, o));

    if shape.is_split() {
        !(point_is_forbidden(board, p1, depth)
            || point_is_forbidden(board, p2, depth)
            || point_is_forbidden(board, p3, depth))
    } else {
        let near_side_blocked =
            point_is_forbidden(board, p0, depth) || point_is_forbidden(board, p1, depth);
        let far_side_blocked =
            point_is_forbidden(board, p2, depth) || point_is_forbidden(board, p3, depth);
        !(near_side_blocked && far_side_blocked)
    }
}

/// Can Black not use `pos` to extend a three?
///
/// Occupied by White and off the board both block. An empty cell blocks when
/// a Black stone there would be an overline, a double-four, a double-three,
/// or would already complete a five.
pub fn is_forbidden_point(board: &mut Board, pos: Pos) -> bool {
    point_is_forbidden(board, pos, 0)
}

pub(crate) fn point_is_forbidden(board: &mut Board, pos: Pos, depth: usize) -> bool {
    match board.get(pos) {
        Stone::White | Stone::OutOfBoard => return true,
        // Never a completion point: a Black stone there would have matched a four first.
        Stone::Black => return false,
        Stone::Empty => {}
    }
    assert!(
        depth <= TOTAL_CELLS,
        "forbidden-point recursion at {pos} reached depth {depth}"
    );

    let previous = board.get(pos);
    board.set(pos, Stone::Black);
    let counter = classify_at_depth(board, pos, true, depth + 1);
    board.set(pos, previous);

    let blocked = counter.blocks_completion();
    trace!(
        "completion point {pos} depth {depth}: threes={} fours={} fives={} overlines={} -> {}",
        counter.threes,
        counter.fours,
        counter.fives,
        counter.overlines,
        if blocked { "blocked" } else { "open" }
    );
    blocked
}

/// Would a Black stone on `pos` lose the game on the spot?
///
/// Only empty intersections qualify. A move that is forbidden loses even if
/// it also completes a five.
pub fn is_forbidden_move(board: &mut Board, pos: Pos) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    board.set(pos, Stone::Black);
    let counter = classify_at_depth(board, pos, true, 0);
    board.set(pos, Stone::Empty);
    counter.is_forbidden_shape()
}

/// Every empty intersection where Black is not allowed to play, row-major.
pub fn forbidden_moves(board: &mut Board) -> Vec<Pos> {
    let empties: Vec<Pos> = board
        .iter()
        .filter(|&(_, s)| s == Stone::Empty)
        .map(|(p, _)| p)
        .collect();
    empties
        .into_iter()
        .filter(|&p| is_forbidden_move(board, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::counter::classify;

    fn place_all(board: &mut Board, stones: &[(u8, u8)], stone: Stone) {
        for &(x, y) in stones {
            board.set(Pos::new(x, y), stone);
        }
    }

    /// Three stones in a column above (9,7) and three below it, so a Black
    /// stone on (9,7) makes seven in a row.
    fn overline_column(board: &mut Board) {
        place_all(
            board,
            &[(9, 4), (9, 5), (9, 6), (9, 8), (9, 9), (9, 10)],
            Stone::Black,
        );
    }

    #[test]
    fn test_nothing_forbidden_on_empty_board() {
        let mut board = Board::new();
        assert!(!is_forbidden_move(&mut board, Pos::new(7, 7)));
        assert!(!is_forbidden_point(&mut board, Pos::new(7, 7)));
        assert!(forbidden_moves(&mut board).is_empty());
    }

    #[test]
    fn test_white_and_edge_block_completion() {
        let mut board = Board::new();
        board.set(Pos::new(3, 3), Stone::White);
        assert!(is_forbidden_point(&mut board, Pos::new(3, 3)));
        assert!(is_forbidden_point(&mut board, Pos::NULL));
        assert!(!is_forbidden_point(&mut board, Pos::new(4, 4)));
    }

    #[test]
    fn test_occupied_is_never_forbidden_move() {
        let mut board = Board::new();
        board.set(Pos::new(7, 7), Stone::Black);
        assert!(!is_forbidden_move(&mut board, Pos::new(7, 7)));
    }

    #[test]
    fn test_double_three_cross_pattern() {
        let mut board = Board::new();
        // Horizontal: _ B _ B _, vertical the same through (7,7)
        place_all(&mut board, &[(6, 7), (8, 7), (7, 6), (7, 8)], Stone::Black);

        assert!(is_forbidden_move(&mut board, Pos::new(7, 7)));
        assert_eq!(forbidden_moves(&mut board), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_double_three_diagonal_cross() {
        let mut board = Board::new();
        place_all(&mut board, &[(6, 6), (8, 8), (8, 6), (6, 8)], Stone::Black);
        assert!(is_forbidden_move(&mut board, Pos::new(7, 7)));
    }

    #[test]
    fn test_single_three_allowed() {
        let mut board = Board::new();
        place_all(&mut board, &[(6, 7), (8, 7)], Stone::Black);
        assert!(!is_forbidden_move(&mut board, Pos::new(7, 7)));
    }

    #[test]
    fn test_overline_point_is_forbidden() {
        let mut board = Board::new();
        overline_column(&mut board);
        assert!(is_forbidden_move(&mut board, Pos::new(9, 7)));
        assert!(is_forbidden_point(&mut board, Pos::new(9, 7)));
    }

    #[test]
    fn test_five_point_blocks_completion_but_is_allowed() {
        let mut board = Board::new();
        place_all(&mut board, &[(2, 2), (3, 2), (4, 2), (5, 2)], Stone::Black);
        assert!(is_forbidden_point(&mut board, Pos::new(6, 2)));
        assert!(!is_forbidden_move(&mut board, Pos::new(6, 2)));
    }

    #[test]
    fn test_three_blocked_on_both_sides_is_not_counted() {
        // W _ B B [B] _ ? with the far extension (9,7) an overline point
        let mut board = Board::new();
        place_all(&mut board, &[(5, 7), (6, 7), (7, 7)], Stone::Black);
        board.set(Pos::new(3, 7), Stone::White);
        overline_column(&mut board);
        let c = classify(&mut board, Pos::new(7, 7), true);
        assert_eq!(c.threes, 0);

        // Without the white stone the near side opens up again
        board.set(Pos::new(3, 7), Stone::Empty);
        let c = classify(&mut board, Pos::new(7, 7), true);
        assert_eq!(c.threes, 1);
    }

    #[test]
    fn test_three_blocked_on_one_side_still_counts() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 7), (6, 7), (7, 7)], Stone::Black);
        board.set(Pos::new(3, 7), Stone::White);
        let c = classify(&mut board, Pos::new(7, 7), true);
        assert_eq!(c.threes, 1);
    }

    #[test]
    fn test_dead_three_does_not_make_double_three() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 7), (6, 7)], Stone::Black);
        board.set(Pos::new(3, 7), Stone::White);
        overline_column(&mut board);
        // Vertical three starting at (7,7)
        place_all(&mut board, &[(7, 8), (7, 9)], Stone::Black);

        assert!(!is_forbidden_move(&mut board, Pos::new(7, 7)));

        board.set(Pos::new(7, 7), Stone::Black);
        let c = classify(&mut board, Pos::new(7, 7), true);
        assert_eq!(c.threes, 1);
    }

    /// Column through (6,7) with three stones on each side: Black on the gap
    /// would make seven in a row.
    fn gap_overline_column(board: &mut Board) {
        place_all(
            board,
            &[(6, 4), (6, 5), (6, 6), (6, 8), (6, 9), (6, 10)],
            Stone::Black,
        );
    }

    #[test]
    fn test_split_three_with_forbidden_gap_is_not_counted() {
        // _ B [_] [B] B _ with the gap (6,7) an overline point
        let mut board = Board::new();
        place_all(&mut board, &[(5, 7), (7, 7), (8, 7)], Stone::Black);
        let c = classify(&mut board, Pos::new(7, 7), true);
        assert_eq!(c.threes, 1, "open split three");

        gap_overline_column(&mut board);
        assert!(is_forbidden_point(&mut board, Pos::new(6, 7)));
        let c = classify(&mut board, Pos::new(7, 7), true);
        assert_eq!(c.threes, 0, "gap cannot be filled");
    }

    #[test]
    fn test_dead_split_three_does_not_make_double_three() {
        let mut board = Board::new();
        // Split three on the row and a solid three up the column, both at (7,7)
        place_all(&mut board, &[(5, 7), (8, 7), (7, 8), (7, 9)], Stone::Black);
        assert!(is_forbidden_move(&mut board, Pos::new(7, 7)));

        gap_overline_column(&mut board);
        assert!(!is_forbidden_move(&mut board, Pos::new(7, 7)));
    }

    #[test]
    fn test_completion_point_blocked_by_double_three() {
        let mut board = Board::new();
        place_all(
            &mut board,
            &[(5, 7), (6, 7), (7, 7), (9, 5), (9, 6), (10, 8), (11, 9)],
            Stone::Black,
        );
        board.set(Pos::new(3, 7), Stone::White);

        // Black on (9,7) would open two threes, so the far side is dead
        board.set(Pos::new(9, 7), Stone::Black);
        let at_point = classify(&mut board, Pos::new(9, 7), true);
        board.set(Pos::new(9, 7), Stone::Empty);
        assert_eq!(at_point.threes, 2);
        assert!(at_point.fours < 2 && at_point.overlines == 0 && at_point.fives == 0);

        assert!(is_forbidden_point(&mut board, Pos::new(9, 7)));
        let c = classify(&mut board, Pos::new(7, 7), true);
        assert_eq!(c.threes, 0);
    }

    #[test]
    fn test_completion_point_blocked_by_double_four() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 7), (6, 7), (7, 7)], Stone::Black);
        // A column and a diagonal that both become fours through (9,7)
        place_all(
            &mut board,
            &[(9, 9), (9, 10), (9, 11), (10, 8), (11, 9), (12, 10)],
            Stone::Black,
        );
        let c = classify(&mut board, Pos::new(7, 7), true);
        assert_eq!(c.threes, 1, "near side still open");

        board.set(Pos::new(3, 7), Stone::White);
        board.set(Pos::new(9, 7), Stone::Black);
        let at_point = classify(&mut board, Pos::new(9, 7), true);
        board.set(Pos::new(9, 7), Stone::Empty);
        assert!(at_point.fours >= 2);
        assert_eq!(at_point.threes, 0);
        assert_eq!(at_point.overlines + at_point.fives, 0);

        assert!(is_forbidden_point(&mut board, Pos::new(9, 7)));
        let c = classify(&mut board, Pos::new(7, 7), true);
        assert_eq!(c.threes, 0);
    }

    #[test]
    fn test_resolution_restores_board() {
        let mut board = Board::new();
        place_all(&mut board, &[(6, 7), (8, 7), (7, 6), (7, 8)], Stone::Black);
        place_all(&mut board, &[(5, 7), (10, 10)], Stone::White);
        let before = board.clone();

        let _ = forbidden_moves(&mut board);
        let _ = is_forbidden_point(&mut board, Pos::new(9, 7));
        assert_eq!(board, before);
    }
}
