//! Move legality.
//!
//! Every function here is a pure query over a board snapshot and is total: off-board or empty
//! sources simply make a move illegal.

use alloc::vec::Vec;

use crate::*;

/// Exactly one step up, down, left or right.
pub const fn is_adjacent_move(start: Coord2, end: Coord2) -> bool {
    let row_diff = start.0.abs_diff(end.0);
    let col_diff = start.1.abs_diff(end.1);
    (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
}

/// Whether a piece of rank `attacker` may take a piece of rank `defender`.
pub const fn can_capture(attacker: Rank, defender: Rank) -> bool {
    match (attacker, defender) {
        (SOLDIER_RANK, GENERAL_RANK) => true,
        (GENERAL_RANK, SOLDIER_RANK) => false,
        _ => attacker <= defender,
    }
}

/// Occupied cells strictly between `start` and `end`. Zero unless both share a row or column.
pub fn count_pieces_between(board: &Board, start: Coord2, end: Coord2) -> usize {
    let (start_row, start_col) = start;
    let (end_row, end_col) = end;

    if start_row == end_row {
        let (lo, hi) = (start_col.min(end_col), start_col.max(end_col));
        (lo.saturating_add(1)..hi)
            .filter(|&col| board.is_occupied((start_row, col)))
            .count()
    } else if start_col == end_col {
        let (lo, hi) = (start_row.min(end_row), start_row.max(end_row));
        (lo.saturating_add(1)..hi)
            .filter(|&row| board.is_occupied((row, start_col)))
            .count()
    } else {
        0
    }
}

/// A cannon only ever captures, and only by jumping exactly one piece along a row or column.
pub fn is_valid_cannon_move(
    board: &Board,
    cannon: Piece,
    target: Option<Piece>,
    start: Coord2,
    end: Coord2,
) -> bool {
    let Some(target) = target else {
        return false;
    };
    if target.player == cannon.player {
        return false;
    }
    if start.0 != end.0 && start.1 != end.1 {
        return false;
    }

    count_pieces_between(board, start, end) == 1
}

pub fn is_valid_move(board: &Board, start: Coord2, end: Coord2) -> bool {
    let Some(piece) = board.get(start) else {
        return false;
    };
    if !in_bounds(end) {
        return false;
    }
    let target = board.get(end);

    if piece.kind.is_cannon() {
        return is_valid_cannon_move(board, piece, target, start, end);
    }

    if !is_adjacent_move(start, end) {
        return false;
    }

    match target {
        None => true,
        Some(target) if target.player == piece.player => false,
        Some(target) => can_capture(piece.rank(), target.rank()),
    }
}

/// Every destination the piece at `from` may legally move to, in row-major order.
pub fn legal_targets(board: &Board, from: Coord2) -> Vec<Coord2> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    if piece.kind.is_cannon() {
        let (row, col) = from;
        let mut targets: Vec<_> = (0..BOARD_COLS)
            .map(|c| (row, c))
            .chain((0..BOARD_ROWS).map(|r| (r, col)))
            .filter(|&end| end != from && is_valid_move(board, from, end))
            .collect();
        targets.sort_unstable();
        targets
    } else {
        let mut targets: Vec<_> = OrthogonalIter::new(from)
            .filter(|&end| is_valid_move(board, from, end))
            .collect();
        targets.sort_unstable();
        targets
    }
}
