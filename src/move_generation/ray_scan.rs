//! Shared ray walking over the board grid.
//!
//! One step of the occupancy rule: an empty square is recorded and scanning
//! continues, an enemy square is recorded and ends the ray (capture is the
//! last reachable square), a friendly square ends the ray unrecorded.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Color};

/// Apply the occupancy rule to a single square.
///
/// Records the square in `out` when it is empty or enemy-held and returns
/// whether a ray may continue past it.
#[inline]
pub fn probe_square(
    board: &BoardState,
    mover_color: Color,
    target: BoardLocation,
    out: &mut Vec<BoardLocation>,
) -> bool {
    match board.color_at(target) {
        None => {
            out.push(target);
            true
        }
        Some(color) if color != mover_color => {
            out.push(target);
            false
        }
        Some(_) => false,
    }
}

/// Walk outward from `from` one square at a time, applying the occupancy
/// rule until the ray is blocked or leaves the board.
pub fn scan_ray(
    board: &BoardState,
    mover_color: Color,
    from: BoardLocation,
    d_file: i8,
    d_rank: i8,
    out: &mut Vec<BoardLocation>,
) {
    let mut cursor = from;
    while let Some(next) = cursor.offset(d_file, d_rank) {
        if !probe_square(board, mover_color, next, out) {
            break;
        }
        cursor = next;
    }
}
