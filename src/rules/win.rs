//! Win condition checking for free-style Gomoku
//!
//! Five or more stones in a row wins; overlines count. Only the lines through
//! the stone just played are scanned, so a check costs O(BOARD_SIZE).

use crate::board::{Board, Pos, Stone};

use super::WIN_LENGTH;

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Count consecutive `color` stones starting one step from `pos` along
/// `(dr, dc)`. Stops at the first other cell or the board edge.
#[inline]
fn count_direction(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut step = 1;
    while let Some(next) = pos.offset(dr, dc, step) {
        if board.get(next) != Some(color) {
            break;
        }
        count += 1;
        step += 1;
    }
    count
}

/// Length of the run through `pos` along one axis, `pos` counted once.
///
/// Returns 0 for an empty cell.
#[inline]
pub fn run_length(board: &Board, pos: Pos, (dr, dc): (i32, i32)) -> usize {
    let Some(color) = board.get(pos) else {
        return 0;
    };
    1 + count_direction(board, pos, dr, dc, color) + count_direction(board, pos, -dr, -dc, color)
}

/// Fast five-in-a-row check at a specific position.
///
/// Only checks the 4 axes through `pos`. No allocation.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| run_length(board, pos, dir) >= WIN_LENGTH)
}

/// The full winning run through `pos`, if any.
///
/// Positions are ordered from the negative end of the axis to the positive
/// end. Axes are tried in `DIRECTIONS` order; the first winning one is
/// returned.
pub fn winning_line(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos)?;

    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, -dr, -dc, color);
        let forward = count_direction(board, pos, dr, dc, color);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }
        // In range: every step was just walked by count_direction
        let line = (-(back as i32)..=forward as i32)
            .filter_map(|n| pos.offset(dr, dc, n))
            .collect();
        return Some(line);
    }
    None
}
