//! Bishop destination generation.
//!
//! Diagonal ray scans, with the whole diagonal family suppressed while the
//! bishop is exposed on its rank or file, and each diagonal gated by
//! exposure on the other.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::move_generation::king_safety::exposure_map;
use crate::move_generation::ray_scan::scan_ray;

pub fn generate_bishop_moves(board: &BoardState, mover: &Piece, out: &mut Vec<BoardLocation>) {
    let exposure = exposure_map(board, mover);
    if exposure.any_straight() {
        return;
    }

    if !exposure.falling {
        // Rising diagonal: up-right and down-left.
        scan_ray(board, mover.color, mover.location, 1, 1, out);
        scan_ray(board, mover.color, mover.location, -1, -1, out);
    }
    if !exposure.rising {
        // Falling diagonal: up-left and down-right.
        scan_ray(board, mover.color, mover.location, -1, 1, out);
        scan_ray(board, mover.color, mover.location, 1, -1, out);
    }
}
