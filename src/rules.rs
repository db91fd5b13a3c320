//! Win and draw detection over the lines of a [`Board`].
//!
//! Nothing here is cached: every query rescans the whole board.

use crate::board::{Board, Cell, Color};

/// Color owning a run of at least `win_length` adjacent pieces in `line`.
///
/// Lines shorter than `win_length` never match. A `win_length` of zero is
/// treated as one.
pub fn line_winner(line: &[Cell], win_length: usize) -> Option<Color> {
    let win_length = win_length.max(1);
    let mut run = 0;
    let mut current: Cell = None;

    for &cell in line {
        if cell.is_some() && cell == current {
            run += 1;
        } else {
            current = cell;
            run = usize::from(cell.is_some());
        }
        if run >= win_length {
            return current;
        }
    }

    None
}

/// First color found with a winning line, scanning rows, then columns, then
/// diagonals.
pub fn board_winner(board: &Board, win_length: usize) -> Option<Color> {
    board
        .lines()
        .find_map(|line| line_winner(&line, win_length))
}

/// The board is full and nobody has won.
pub fn is_draw(board: &Board, win_length: usize) -> bool {
    board.is_full() && board_winner(board, win_length).is_none()
}
