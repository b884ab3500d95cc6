//! Four-in-a-row detection.

use super::super::{Board, Sign};
use tracing::{debug, instrument};

/// Number of aligned tokens that wins a game.
pub const WIN_LENGTH: usize = 4;

/// Directions scanned from each anchor as (row step, column step).
///
/// Together with the opposite directions these cover rows, columns and
/// both diagonals, so anchoring a window at every cell sees every line.
const DIRECTIONS: [(isize, isize); 4] = [
    // Horizontal
    (0, 1),
    // Vertical
    (1, 0),
    // Diagonal, down-right
    (1, 1),
    // Diagonal, down-left
    (1, -1),
];

/// Checks whether `sign` has four aligned tokens anywhere on the board.
///
/// Cells are scanned in row-major order and the first complete window
/// ends the scan.
#[instrument(skip(board), fields(rows = board.rows(), columns = board.columns()))]
pub fn has_four_in_a_row(board: &Board, sign: Sign) -> bool {
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            if !board.at(row, column).holds(sign) {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                if window_holds(board, sign, row, column, dr, dc) {
                    debug!(row = row + 1, column = column + 1, dr, dc, "Four in a row");
                    return true;
                }
            }
        }
    }
    false
}

/// Checks the window of [`WIN_LENGTH`] cells starting at the anchor.
///
/// Windows that leave the grid never match.
fn window_holds(
    board: &Board,
    sign: Sign,
    row: usize,
    column: usize,
    dr: isize,
    dc: isize,
) -> bool {
    (0..WIN_LENGTH as isize).all(|step| {
        let r = row.checked_add_signed(dr * step);
        let c = column.checked_add_signed(dc * step);
        match (r, c) {
            (Some(r), Some(c)) if r < board.rows() && c < board.columns() => {
                board.at(r, c).holds(sign)
            }
            _ => false,
        }
    })
}
