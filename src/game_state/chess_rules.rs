//! Starting layout and fixed board geometry.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Ranks the two sides start on: (back rank, pawn rank).
pub const LIGHT_HOME_RANKS: (i8, i8) = (0, 1);
pub const DARK_HOME_RANKS: (i8, i8) = (7, 6);
