//! Central board state: grid occupancy, piece roster, turn, and history.
//!
//! The grid stores an explicit `Option<PieceId>` per cell; the roster owns the
//! pieces themselves. `commit_move` is the only path that repositions pieces,
//! and it keeps the roster's recorded locations and the grid cells in sync.

use chrono::Utc;

use crate::errors::{GameError, GameResult};
use crate::game_state::chess_rules::{BACK_RANK, DARK_HOME_RANKS, LIGHT_HOME_RANKS};
use crate::game_state::chess_types::{BoardLocation, Color, Piece, PieceId, PieceKind};
use crate::game_state::history::MoveRecord;

#[derive(Debug, Clone)]
pub struct BoardState {
    cells: [[Option<PieceId>; 8]; 8],
    pieces: Vec<Piece>,
    side_to_move: Color,
    history: Vec<MoveRecord>,
}

impl BoardState {
    /// Empty board, light to move. Mostly useful for scenario setup.
    pub fn empty() -> Self {
        BoardState {
            cells: [[None; 8]; 8],
            pieces: Vec::new(),
            side_to_move: Color::Light,
            history: Vec::new(),
        }
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for (color, (back, pawns)) in [
            (Color::Light, LIGHT_HOME_RANKS),
            (Color::Dark, DARK_HOME_RANKS),
        ] {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let location = BoardLocation::new(file as i8, back)
                    .expect("back rank squares are on the board");
                board.place(color, *kind, location);
            }
            for file in 0..8 {
                let location = BoardLocation::new(file, pawns)
                    .expect("pawn rank squares are on the board");
                board.place(color, PieceKind::Pawn, location);
            }
        }
        board
    }

    /// Add a piece to the roster and grid. Panics on an occupied square;
    /// setup code controls its own layouts.
    pub fn place(&mut self, color: Color, kind: PieceKind, location: BoardLocation) -> PieceId {
        assert!(
            self.cell(location).is_none(),
            "placing {kind:?} on occupied square {location}"
        );
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece {
            color,
            kind,
            location,
            active: true,
        });
        *self.cell_mut(location) = Some(id);
        id
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<PieceId> {
        self.cell(location)
    }

    #[inline]
    pub fn color_at(&self, location: BoardLocation) -> Option<Color> {
        self.cell(location).map(|id| self.piece(id).color)
    }

    pub fn king_location(&self, color: Color) -> Option<BoardLocation> {
        self.pieces
            .iter()
            .find(|p| p.active && p.color == color && p.kind == PieceKind::King)
            .map(|p| p.location)
    }

    pub fn king_id(&self, color: Color) -> Option<PieceId> {
        self.pieces
            .iter()
            .position(|p| p.active && p.color == color && p.kind == PieceKind::King)
            .map(PieceId)
    }

    /// All roster entries, captured pieces included.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter().enumerate().map(|(i, p)| (PieceId(i), p))
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Move a piece, capturing whatever stands on the destination.
    ///
    /// The destination must be empty or hold an enemy piece; legality beyond
    /// that is the move generator's business and is checked by the caller.
    /// Updates the grid and the piece's recorded location together, records
    /// the move, and flips the turn.
    pub fn commit_move(&mut self, mover: PieceId, to: BoardLocation) -> GameResult<MoveRecord> {
        let from = self.pieces[mover.0].location;
        if !self.pieces[mover.0].active || self.cell(from) != Some(mover) {
            return Err(GameError::NoPieceAt { location: from });
        }

        let captured = match self.cell(to) {
            Some(occupant) if self.piece(occupant).color == self.pieces[mover.0].color => {
                return Err(GameError::IllegalDestination { from, to });
            }
            Some(occupant) => {
                self.pieces[occupant.0].active = false;
                Some(occupant)
            }
            None => None,
        };

        *self.cell_mut(from) = None;
        *self.cell_mut(to) = Some(mover);
        self.pieces[mover.0].location = to;
        self.side_to_move = self.side_to_move.opposite();

        let record = MoveRecord {
            mover,
            from,
            to,
            captured,
            at: Utc::now(),
        };
        self.history.push(record.clone());
        Ok(record)
    }

    /// Revert the most recent committed move, reviving its capture.
    pub fn undo_last(&mut self) -> GameResult<MoveRecord> {
        let record = self.history.pop().ok_or(GameError::EmptyHistory)?;

        *self.cell_mut(record.to) = None;
        *self.cell_mut(record.from) = Some(record.mover);
        self.pieces[record.mover.0].location = record.from;

        if let Some(captured) = record.captured {
            self.pieces[captured.0].active = true;
            self.pieces[captured.0].location = record.to;
            *self.cell_mut(record.to) = Some(captured);
        }

        self.side_to_move = self.side_to_move.opposite();
        Ok(record)
    }

    /// Put every piece back on its starting square and clear the history.
    pub fn reset(&mut self) {
        let fresh = Self::new_game();
        self.cells = fresh.cells;
        for (piece, start) in self.pieces.iter_mut().zip(fresh.pieces.iter()) {
            piece.location = start.location;
            piece.active = true;
        }
        self.side_to_move = Color::Light;
        self.history.clear();
    }

    #[inline]
    fn cell(&self, location: BoardLocation) -> Option<PieceId> {
        self.cells[location.rank as usize][location.file as usize]
    }

    #[inline]
    fn cell_mut(&mut self, location: BoardLocation) -> &mut Option<PieceId> {
        &mut self.cells[location.rank as usize][location.file as usize]
    }
}
