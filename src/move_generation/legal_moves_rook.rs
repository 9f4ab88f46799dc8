//! Rook destination generation.
//!
//! Rank and file ray scans, with the whole straight family suppressed while
//! the rook is exposed on either diagonal through its king.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::move_generation::king_safety::exposure_map;
use crate::move_generation::ray_scan::scan_ray;

pub fn generate_rook_moves(board: &BoardState, mover: &Piece, out: &mut Vec<BoardLocation>) {
    let exposure = exposure_map(board, mover);
    if exposure.any_diagonal() {
        return;
    }

    if !exposure.rank {
        scan_ray(board, mover.color, mover.location, 0, 1, out);
        scan_ray(board, mover.color, mover.location, 0, -1, out);
    }
    if !exposure.file {
        scan_ray(board, mover.color, mover.location, -1, 0, out);
        scan_ray(board, mover.color, mover.location, 1, 0, out);
    }
}
