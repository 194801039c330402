//! Four-in-a-row detection.
//!
//! Every cell is tried as the anchor of four runs that only extend forward
//! (right, down, down-right, down-left). Any straight or diagonal line of four
//! has exactly one such anchor, its top-most then left-most cell, so scanning
//! every anchor finds every win.

use super::{Board, Cell, Player};

pub const RUN_LENGTH: usize = 4;

/// (row step, column step) for each orientation probed from an anchor.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // down-right
    (1, -1), // down-left
];

pub type Run = [(usize, usize); RUN_LENGTH];

/// Check whether `player` has four in a row anywhere on the board
pub fn has_win(board: &Board, player: Player) -> bool {
    winning_run(board, player).is_some()
}

/// First winning run for `player` in anchor scan order (row-major, then
/// horizontal, vertical, down-right, down-left).
pub fn winning_run(board: &Board, player: Player) -> Option<Run> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for &(dr, dc) in &DIRECTIONS {
                if let Some(run) = run_from(board, player, row, col, dr, dc) {
                    return Some(run);
                }
            }
        }
    }
    None
}

/// The run anchored at (row, col) if all of its cells are on the board and owned by `player`.
fn run_from(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> Option<Run> {
    let mut run = [(0, 0); RUN_LENGTH];
    for (step, slot) in run.iter_mut().enumerate() {
        let r = row.checked_add_signed(dr * step as isize)?;
        let c = col.checked_add_signed(dc * step as isize)?;
        // Off-board cells are simply not a match.
        if board.cell(r, c)? != Cell::Occupied(player) {
            return None;
        }
        *slot = (r, c);
    }
    Some(run)
}
