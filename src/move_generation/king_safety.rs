//! King-exposure scans backing the per-axis move suppression.
//!
//! A mover is "exposed" along an axis when a directional scan from its own
//! king reaches the mover over empty squares and, continuing past it, the
//! first occupied square holds an enemy slider of the matching family
//! (rook or queen on the straight axes, bishop or queen on the diagonals).
//! The result is used to suppress whole direction families rather than to
//! prove a true single-blocker pin, and attackers on axes unrelated to the
//! mover's own movement are never considered.

use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Color, Piece, PieceKind};

/// Exposure verdict per axis family, relative to one mover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExposureMap {
    /// Exposed along the mover's rank; suppresses up/down movement.
    pub rank: bool,
    /// Exposed along the mover's file; suppresses left/right movement.
    pub file: bool,
    /// Exposed along the rising diagonal; suppresses falling-diagonal movement.
    pub rising: bool,
    /// Exposed along the falling diagonal; suppresses rising-diagonal movement.
    pub falling: bool,
}

impl ExposureMap {
    #[inline]
    pub fn any_straight(self) -> bool {
        self.rank || self.file
    }

    #[inline]
    pub fn any_diagonal(self) -> bool {
        self.rising || self.falling
    }
}

/// Scan all four axes through the mover's king.
pub fn exposure_map(board: &BoardState, mover: &Piece) -> ExposureMap {
    let Some(king) = board.king_location(mover.color) else {
        return ExposureMap::default();
    };
    if king == mover.location {
        // The king itself is never pin-suppressed.
        return ExposureMap::default();
    }

    ExposureMap {
        rank: exposed_along(board, mover, king, (1, 0), true),
        file: exposed_along(board, mover, king, (0, 1), true),
        rising: exposed_along(board, mover, king, (1, 1), false),
        falling: exposed_along(board, mover, king, (1, -1), false),
    }
}

fn exposed_along(
    board: &BoardState,
    mover: &Piece,
    king: BoardLocation,
    axis: (i8, i8),
    straight: bool,
) -> bool {
    scan_direction(board, mover, king, axis, straight)
        || scan_direction(board, mover, king, (-axis.0, -axis.1), straight)
}

/// Walk from the king in one direction. The scan must reach the mover over
/// empty squares; the first occupied square past it decides exposure.
fn scan_direction(
    board: &BoardState,
    mover: &Piece,
    king: BoardLocation,
    (d_file, d_rank): (i8, i8),
    straight: bool,
) -> bool {
    let mut cursor = king;
    let mut past_mover = false;

    while let Some(next) = cursor.offset(d_file, d_rank) {
        cursor = next;
        if cursor == mover.location {
            past_mover = true;
            continue;
        }
        if let Some(id) = board.piece_at(cursor) {
            if !past_mover {
                return false;
            }
            let occupant = board.piece(id);
            let attacks_axis = match occupant.kind {
                PieceKind::Queen => true,
                PieceKind::Rook => straight,
                PieceKind::Bishop => !straight,
                _ => false,
            };
            return occupant.color == mover.color.opposite() && attacks_axis;
        }
    }

    false
}
