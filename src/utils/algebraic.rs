//! Conversions between algebraic square names and board coordinates.
//!
//! Backs the square-trigger surface and the terminal renderer.

use crate::game_state::chess_types::BoardLocation;

/// Parse a square name (for example: "e4") into a board location.
#[inline]
pub fn parse_square(name: &str) -> Option<BoardLocation> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    BoardLocation::new((file - b'a') as i8, (rank - b'1') as i8)
}

/// Render a board location as its square name.
#[inline]
pub fn square_name(location: BoardLocation) -> String {
    location.to_string()
}
