//! Queen destination generation.
//!
//! The straight family runs only while the queen is not exposed on either
//! diagonal, the diagonal family only while she is not exposed on her rank
//! or file; within each family the axes gate each other as for rook/bishop.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::move_generation::king_safety::exposure_map;
use crate::move_generation::ray_scan::scan_ray;

pub fn generate_queen_moves(board: &BoardState, mover: &Piece, out: &mut Vec<BoardLocation>) {
    let exposure = exposure_map(board, mover);

    if !exposure.any_diagonal() {
        if !exposure.rank {
            scan_ray(board, mover.color, mover.location, 0, 1, out);
            scan_ray(board, mover.color, mover.location, 0, -1, out);
        }
        if !exposure.file {
            scan_ray(board, mover.color, mover.location, -1, 0, out);
            scan_ray(board, mover.color, mover.location, 1, 0, out);
        }
    }

    if !exposure.any_straight() {
        if !exposure.falling {
            scan_ray(board, mover.color, mover.location, 1, 1, out);
            scan_ray(board, mover.color, mover.location, -1, -1, out);
        }
        if !exposure.rising {
            scan_ray(board, mover.color, mover.location, -1, 1, out);
            scan_ray(board, mover.color, mover.location, 1, -1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceId, PieceKind};

    fn loc(file: i8, rank: i8) -> BoardLocation {
        BoardLocation::new(file, rank).expect("test coordinates are on the board")
    }

    fn moves_for(board: &BoardState, id: PieceId) -> Vec<BoardLocation> {
        let mut out = Vec::new();
        generate_queen_moves(board, &board.piece(id).clone(), &mut out);
        out
    }

    #[test]
    fn central_queen_on_empty_board_has_twenty_seven_destinations() {
        let mut board = BoardState::empty();
        let queen = board.place(Color::Light, PieceKind::Queen, loc(3, 3));
        assert_eq!(moves_for(&board, queen).len(), 27);
    }

    #[test]
    fn file_exposure_confines_the_queen_to_her_file() {
        let mut board = BoardState::empty();
        board.place(Color::Light, PieceKind::King, loc(3, 0));
        let queen = board.place(Color::Light, PieceKind::Queen, loc(3, 3));
        board.place(Color::Dark, PieceKind::Queen, loc(3, 7));

        let moves = moves_for(&board, queen);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.file == 3));
        assert!(moves.contains(&loc(3, 7)));
    }

    #[test]
    fn diagonal_exposure_removes_the_straight_family_entirely() {
        let mut board = BoardState::empty();
        board.place(Color::Light, PieceKind::King, loc(0, 0));
        let queen = board.place(Color::Light, PieceKind::Queen, loc(3, 3));
        board.place(Color::Dark, PieceKind::Bishop, loc(7, 7));

        let moves = moves_for(&board, queen);
        assert!(moves
            .iter()
            .all(|m| (m.file - 3).abs() == (m.rank - 3).abs()));
        // The rising diagonal itself stays available.
        assert!(moves.contains(&loc(7, 7)));
        assert!(moves.contains(&loc(1, 1)));
    }
}
