//! Per-piece legal destination generation.
//!
//! `rule_destinations` is a pure query: color, position, and occupancy go in
//! as explicit parameters, a locally built destination list comes out. It
//! never mutates the snapshot, never leaves the board, and reports "no legal
//! moves" as an empty list rather than an error.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Piece, PieceKind};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Every square the piece may legally move to under the board snapshot.
pub fn rule_destinations(board: &BoardState, mover: &Piece) -> Vec<BoardLocation> {
    let mut out = Vec::new();
    match mover.kind {
        PieceKind::Pawn => generate_pawn_moves(board, mover, &mut out),
        PieceKind::Knight => generate_knight_moves(board, mover, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, mover, &mut out),
        PieceKind::Rook => generate_rook_moves(board, mover, &mut out),
        PieceKind::Queen => generate_queen_moves(board, mover, &mut out),
        PieceKind::King => generate_king_moves(board, mover, &mut out),
    }
    out
}

/// Destinations for whatever stands on `location`; an empty square has none.
pub fn destinations_from(board: &BoardState, location: BoardLocation) -> Vec<BoardLocation> {
    match board.piece_at(location) {
        Some(id) => rule_destinations(board, &board.piece(id).clone()),
        None => Vec::new(),
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
    fn every_destination_stays_in_bounds_for_every_kind() {
        let kinds = [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ];
        for kind in kinds {
            for file in 0..8 {
                for rank in 0..8 {
                    let mut board = BoardState::empty();
                    let id = board.place(Color::Dark, kind, loc(file, rank));
                    for dest in rule_destinations(&board, &board.piece(id).clone()) {
                        assert!((0..8).contains(&dest.file), "{kind:?} left the board");
                        assert!((0..8).contains(&dest.rank), "{kind:?} left the board");
                    }
                }
            }
        }
    }

    #[test]
    fn generation_is_idempotent_and_leaves_the_snapshot_untouched() {
        let board = BoardState::new_game();
        let knight = board.piece_at(loc(1, 0)).expect("b1 starts occupied");
        let mover = board.piece(knight).clone();

        let first = rule_destinations(&board, &mover);
        let second = rule_destinations(&board, &mover);
        assert_eq!(first, second);

        // Nothing moved and nothing was captured by querying.
        for (id, piece) in board.pieces() {
            assert!(piece.active);
            assert_eq!(board.piece_at(piece.location), Some(id));
        }
    }

    #[test]
    fn boxed_in_piece_yields_an_empty_list_not_an_error() {
        let board = BoardState::new_game();
        let rook = board.piece_at(loc(0, 0)).expect("a1 starts occupied");
        assert!(rule_destinations(&board, &board.piece(rook).clone()).is_empty());
    }

    #[test]
    fn empty_square_has_no_destinations() {
        let board = BoardState::new_game();
        assert!(destinations_from(&board, loc(4, 4)).is_empty());
    }

    #[test]
    fn startpos_knight_has_its_two_developing_moves() {
        let board = BoardState::new_game();
        let moves = destinations_from(&board, loc(1, 0));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&loc(0, 2)));
        assert!(moves.contains(&loc(2, 2)));
    }
}
