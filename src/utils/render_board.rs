//! Plain-text position view for the driver loop and test diagnostics.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Color, PieceKind};

const FILE_LEGEND: &str = "  a b c d e f g h";

/// Lay the position out rank by rank, dark side at the top, with rank
/// labels on both margins and the file legend above and below.
pub fn render_board(board: &BoardState) -> String {
    let mut lines = Vec::with_capacity(10);
    lines.push(FILE_LEGEND.to_owned());

    for rank in (0..8i8).rev() {
        let label = char::from(b'1' + rank as u8);
        let squares: Vec<String> = (0..8)
            .filter_map(|file| BoardLocation::new(file, rank))
            .map(|square| glyph_at(board, square).to_string())
            .collect();
        lines.push(format!("{label} {} {label}", squares.join(" ")));
    }

    lines.push(FILE_LEGEND.to_owned());
    lines.join("\n")
}

fn glyph_at(board: &BoardState, square: BoardLocation) -> char {
    let Some(id) = board.piece_at(square) else {
        return '.';
    };
    let piece = board.piece(id);
    let set = match piece.color {
        Color::Light => ['♔', '♕', '♖', '♗', '♘', '♙'],
        Color::Dark => ['♚', '♛', '♜', '♝', '♞', '♟'],
    };
    match piece.kind {
        PieceKind::King => set[0],
        PieceKind::Queen => set[1],
        PieceKind::Rook => set[2],
        PieceKind::Bishop => set[3],
        PieceKind::Knight => set[4],
        PieceKind::Pawn => set[5],
    }
}
