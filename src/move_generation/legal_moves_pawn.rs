//! Pawn destination generation.
//!
//! Forward steps only onto empty squares, a double step from the home rank,
//! and diagonal captures. No en passant and no promotion handling; the
//! committed piece keeps its kind.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_rules::{DARK_HOME_RANKS, LIGHT_HOME_RANKS};
use crate::game_state::chess_types::{BoardLocation, Color, Piece};

pub fn generate_pawn_moves(board: &BoardState, mover: &Piece, out: &mut Vec<BoardLocation>) {
    let forward = mover.color.forward();
    let home_rank = match mover.color {
        Color::Light => LIGHT_HOME_RANKS.1,
        Color::Dark => DARK_HOME_RANKS.1,
    };

    if let Some(one) = mover.location.offset(0, forward) {
        if board.piece_at(one).is_none() {
            out.push(one);
            if mover.location.rank == home_rank {
                if let Some(two) = mover.location.offset(0, 2 * forward) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        if let Some(target) = mover.location.offset(d_file, forward) {
            if board.color_at(target) == Some(mover.color.opposite()) {
                out.push(target);
            }
        }
    }
}
