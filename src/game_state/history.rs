//! Move history records for undo and game review.

use chrono::{DateTime, Utc};

use crate::game_state::chess_types::{BoardLocation, PieceId};

/// One committed move, as recorded at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mover: PieceId,
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub captured: Option<PieceId>,
    pub at: DateTime<Utc>,
}
