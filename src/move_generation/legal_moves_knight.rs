//! Knight destination generation.
//!
//! Fixed offsets under the plain occupancy rule; single-step pieces carry no
//! exposure suppression.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::move_generation::ray_scan::probe_square;

/// Counter-clockwise from east-north-east.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub fn generate_knight_moves(board: &BoardState, mover: &Piece, out: &mut Vec<BoardLocation>) {
    for (d_file, d_rank) in KNIGHT_OFFSETS {
        if let Some(target) = mover.location.offset(d_file, d_rank) {
            probe_square(board, mover.color, target, out);
        }
    }
}
