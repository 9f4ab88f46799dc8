//! Game direction: selection, the move-attempt path, undo/reset, forfeit.
//!
//! Owns the board, the staged visuals, and the animation scheduler, and keeps
//! the three in step: the board commits synchronously, the visuals catch up
//! over the following ticks. Everything here runs on the driver thread.

use tracing::{info, warn};

use crate::animation::fade::Fade;
use crate::animation::forfeit::Forfeit;
use crate::animation::rotate::Rotate;
use crate::animation::scheduler::{Completion, Scheduler, Stage, TrackTag, VisualId};
use crate::animation::travel::{Travel, TRAVEL_PHASE_DURATION};
use crate::animation::visual::{square_to_world, MaterialPalette, PieceVisual};
use crate::errors::{GameError, GameResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::chess_types::{BoardLocation, Color, PieceId};
use crate::game_state::history::MoveRecord;
use crate::interaction::ghost::GhostPickup;
use crate::interaction::highlight::Highlight;
use crate::move_generation::move_generator::rule_destinations;

/// The piece currently in hand and where it may go.
#[derive(Debug, Clone)]
pub struct Selection {
    pub piece: PieceId,
    pub destinations: Vec<BoardLocation>,
}

pub struct GameDirector {
    board: BoardState,
    stage: Stage,
    scheduler: Scheduler,
    palette: MaterialPalette,
    highlights: Vec<Highlight>,
    selection: Option<Selection>,
    ghost: GhostPickup,
}

impl GameDirector {
    pub fn new_game() -> Self {
        let board = BoardState::new_game();
        let palette = MaterialPalette::default();
        let mut stage = Stage::new();
        let mut highlights = Vec::new();

        for (_, piece) in board.pieces() {
            let visual = PieceVisual::at_square(piece.location, piece.color, &palette);
            highlights.push(Highlight::capture(&visual));
            stage.spawn(visual);
        }

        GameDirector {
            board,
            stage,
            scheduler: Scheduler::new(),
            palette,
            highlights,
            selection: None,
            ghost: GhostPickup::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Pieces spawn into an empty stage in roster order, so the handles line up.
    #[inline]
    pub fn visual_of(&self, piece: PieceId) -> VisualId {
        VisualId(piece.0)
    }

    /// Select the piece on `location` for the side to move and cache its
    /// legal destinations.
    pub fn select(&mut self, location: BoardLocation) -> GameResult<&Selection> {
        let piece_id = self
            .board
            .piece_at(location)
            .ok_or(GameError::NoPieceAt { location })?;
        let piece = self.board.piece(piece_id).clone();
        if piece.color != self.board.side_to_move() {
            warn!(%location, "selection rejected: off-turn piece");
            return Err(GameError::OffTurnSelection {
                location,
                side_to_move: self.board.side_to_move(),
            });
        }

        self.clear_selection_highlight();
        let destinations = rule_destinations(&self.board, &piece);
        let visual_id = self.visual_of(piece_id);
        if let Some(visual) = self.stage.get_mut(visual_id) {
            self.highlights[piece_id.0].grab_on(visual);
        }

        info!(%location, moves = destinations.len(), "piece selected");
        Ok(self.selection.insert(Selection {
            piece: piece_id,
            destinations,
        }))
    }

    pub fn deselect(&mut self) {
        self.clear_selection_highlight();
        self.selection = None;
    }

    /// Raise the touch highlight while a pointer rests on `location`. The
    /// grab highlight of the selected piece is never overridden.
    pub fn hover(&mut self, location: BoardLocation) -> GameResult<()> {
        let piece_id = self
            .board
            .piece_at(location)
            .ok_or(GameError::NoPieceAt { location })?;
        if self.selection.as_ref().map(|s| s.piece) == Some(piece_id) {
            return Ok(());
        }
        let visual_id = self.visual_of(piece_id);
        if let Some(visual) = self.stage.get_mut(visual_id) {
            self.highlights[piece_id.0].touch_on(visual);
        }
        Ok(())
    }

    /// Drop the touch highlight once the pointer leaves `location`.
    pub fn hover_off(&mut self, location: BoardLocation) -> GameResult<()> {
        let piece_id = self
            .board
            .piece_at(location)
            .ok_or(GameError::NoPieceAt { location })?;
        if self.selection.as_ref().map(|s| s.piece) == Some(piece_id) {
            return Ok(());
        }
        let visual_id = self.visual_of(piece_id);
        if let Some(visual) = self.stage.get_mut(visual_id) {
            self.highlights[piece_id.0].off(visual);
        }
        Ok(())
    }

    /// Commit the selected piece to `to` and schedule its travel, rotation,
    /// and the capture fade-out.
    pub fn try_move(&mut self, to: BoardLocation) -> GameResult<MoveRecord> {
        let selection = self.selection.as_ref().ok_or(GameError::NoSelection)?;
        let mover = selection.piece;
        let from = self.board.piece(mover).location;

        if !selection.destinations.contains(&to) {
            warn!(%from, %to, "move rejected: not a generated destination");
            return Err(GameError::IllegalDestination { from, to });
        }

        let record = self.board.commit_move(mover, to)?;
        self.deselect();

        if let Some(captured) = record.captured {
            self.scheduler.play(
                self.visual_of(captured),
                TrackTag::Fade,
                Box::new(Fade::out()),
            );
        }
        self.animate_travel(mover, to, false);

        info!(
            kind = ?self.board.piece(mover).kind,
            %from,
            %to,
            capture = record.captured.is_some(),
            "move committed"
        );
        Ok(record)
    }

    /// Revert the last move, gliding the mover home and reviving its capture.
    pub fn undo(&mut self) -> GameResult<MoveRecord> {
        let record = self.board.undo_last()?;
        self.deselect();

        self.animate_travel(record.mover, record.from, false);
        if let Some(captured) = record.captured {
            let color = self.board.piece(captured).color;
            let visual_id = self.visual_of(captured);
            if let Some(visual) = self.stage.get_mut(visual_id) {
                visual.active = true;
                visual.position = square_to_world(record.to);
            }
            self.scheduler.play(
                visual_id,
                TrackTag::Fade,
                Box::new(Fade::back_in(color, &self.palette)),
            );
        }

        info!(from = %record.to, to = %record.from, "move undone");
        Ok(record)
    }

    /// Return every piece to its starting square, reviving eliminated ones.
    pub fn reset(&mut self) {
        self.board.reset();
        self.deselect();
        self.ghost.destroy_clone(&mut self.stage);

        let placements: Vec<(PieceId, BoardLocation, Color)> = self
            .board
            .pieces()
            .map(|(id, piece)| (id, piece.location, piece.color))
            .collect();

        for (id, home, color) in placements {
            let visual_id = self.visual_of(id);
            let needs_revive = self
                .stage
                .get(visual_id)
                .map(|v| !v.active)
                .unwrap_or(false);
            if needs_revive {
                if let Some(visual) = self.stage.get_mut(visual_id) {
                    visual.active = true;
                    visual.position = square_to_world(home);
                }
                self.scheduler.play(
                    visual_id,
                    TrackTag::Fade,
                    Box::new(Fade::back_in(color, &self.palette)),
                );
            } else {
                self.scheduler.play(
                    visual_id,
                    TrackTag::Travel,
                    Box::new(Travel::sliding_to(square_to_world(home))),
                );
            }
            self.scheduler.play(
                visual_id,
                TrackTag::Rotate,
                Box::new(Rotate::to_upright(color, TRAVEL_PHASE_DURATION * 1.5)),
            );
        }

        info!("board reset");
    }

    /// Topple the forfeiting side's king.
    pub fn forfeit(&mut self, color: Color) -> GameResult<()> {
        let king = self
            .board
            .king_id(color)
            .ok_or(GameError::KingMissing { color })?;
        self.scheduler.play(
            self.visual_of(king),
            TrackTag::Forfeit,
            Box::new(Forfeit::random()),
        );
        info!(?color, "side forfeited");
        Ok(())
    }

    /// Start duplicate-on-pickup mode for the selected piece.
    pub fn begin_ghost_pickup(&mut self) -> GameResult<()> {
        let selection = self.selection.as_ref().ok_or(GameError::NoSelection)?;
        let piece = selection.piece;
        let color = self.board.piece(piece).color;
        let visual = self.visual_of(piece);
        self.ghost.begin(&mut self.stage, visual, color);
        Ok(())
    }

    /// The placeholder clone currently on the board, if any.
    pub fn ghost_clone(&self) -> Option<VisualId> {
        self.ghost.clone_id()
    }

    /// End duplicate-on-pickup mode after the piece is dropped.
    pub fn end_ghost_pickup(&mut self, piece: PieceId) {
        let visual = self.visual_of(piece);
        self.ghost
            .end(&mut self.stage, &mut self.scheduler, visual);
    }

    /// Advance every running animation and route internal completions.
    pub fn tick(&mut self, dt: f32) -> Vec<Completion> {
        let completions = self.scheduler.tick(dt, &mut self.stage);
        completions
            .into_iter()
            .filter(|c| !self.ghost.handle_completion(&mut self.stage, *c))
            .collect()
    }

    fn animate_travel(&mut self, piece: PieceId, to: BoardLocation, slide: bool) {
        let color = self.board.piece(piece).color;
        let visual_id = self.visual_of(piece);
        let end = square_to_world(to);

        let adjacent = self
            .stage
            .get(visual_id)
            .map(|v| (v.position.x - end.x).abs() <= 1.0 && (v.position.z - end.z).abs() <= 1.0)
            .unwrap_or(false);
        let duration = if adjacent || slide {
            TRAVEL_PHASE_DURATION * 1.5
        } else {
            TRAVEL_PHASE_DURATION
        };

        let travel = if slide {
            Travel::sliding_to(end)
        } else {
            Travel::to(end)
        };
        self.scheduler
            .play(visual_id, TrackTag::Travel, Box::new(travel));
        self.scheduler.play(
            visual_id,
            TrackTag::Rotate,
            Box::new(Rotate::to_upright(color, duration)),
        );
    }

    fn clear_selection_highlight(&mut self) {
        if let Some(selection) = &self.selection {
            let piece = selection.piece;
            let visual_id = self.visual_of(piece);
            if let Some(visual) = self.stage.get_mut(visual_id) {
                self.highlights[piece.0].off(visual);
            }
        }
    }
}
