//! Error types for the board, move, and interaction paths.
//!
//! The move generator itself never fails (no legal destinations is an empty
//! result, not an error); errors live on the commit, selection, and trigger
//! paths where a caller handed us something unusable.

use thiserror::Error;

use crate::game_state::chess_types::{BoardLocation, Color};

/// Errors raised by board mutation and the move-attempt path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A square was addressed that holds no piece.
    #[error("no piece at {location}")]
    NoPieceAt { location: BoardLocation },

    /// A piece of the side not to move was selected.
    #[error("{location} holds a piece of the wrong side, {side_to_move:?} is to move")]
    OffTurnSelection {
        location: BoardLocation,
        side_to_move: Color,
    },

    /// A move was attempted to a square the generator did not produce.
    #[error("illegal destination {to} for the piece on {from}")]
    IllegalDestination {
        from: BoardLocation,
        to: BoardLocation,
    },

    /// A move was attempted with no piece selected.
    #[error("no piece is selected")]
    NoSelection,

    /// Undo was requested with no recorded moves.
    #[error("move history is empty")]
    EmptyHistory,

    /// A forfeit was requested for a side whose king is off the board.
    #[error("{color:?} has no king on the board")]
    KingMissing { color: Color },

    /// A trigger name did not resolve to a board square.
    #[error("unknown square trigger: {name}")]
    UnknownTrigger { name: String },
}

pub type GameResult<T> = Result<T, GameError>;
