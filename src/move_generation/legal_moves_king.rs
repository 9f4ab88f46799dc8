//! King destination generation.
//!
//! The eight adjacent squares under the plain occupancy rule. The king is
//! never suppressed by the exposure scans.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::move_generation::ray_scan::probe_square;

/// Counter-clockwise from east.
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn generate_king_moves(board: &BoardState, mover: &Piece, out: &mut Vec<BoardLocation>) {
    for (d_file, d_rank) in KING_OFFSETS {
        if let Some(target) = mover.location.offset(d_file, d_rank) {
            probe_square(board, mover.color, target, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};

    fn loc(file: i8, rank: i8) -> BoardLocation {
        BoardLocation::new(file, rank).expect("test coordinates are on the board")
    }

    #[test]
    fn central_king_has_eight_destinations() {
        let mut board = BoardState::empty();
        let king = board.place(Color::Light, PieceKind::King, loc(4, 4));
        let mut out = Vec::new();
        generate_king_moves(&board, &board.piece(king).clone(), &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn corner_king_has_three_destinations() {
        let mut board = BoardState::empty();
        let king = board.place(Color::Dark, PieceKind::King, loc(7, 7));
        let mut out = Vec::new();
        generate_king_moves(&board, &board.piece(king).clone(), &mut out);
        assert_eq!(out.len(), 3);
    }
}
