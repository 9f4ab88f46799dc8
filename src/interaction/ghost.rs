//! Duplicate-on-pickup mode.
//!
//! While a piece is being carried, a tinted clone marks the square it came
//! from. The clone never interacts with physics, and after the piece is
//! dropped it lingers briefly before being destroyed.

use tracing::debug;

use crate::animation::delay::Delay;
use crate::animation::scheduler::{Completion, Scheduler, Stage, TrackTag, VisualId};
use crate::animation::visual::Rgba;
use crate::game_state::chess_types::Color;

pub const LIGHT_CLONE_TINT: Rgba = Rgba::new(1.0, 0.888, 0.439, 1.0);
pub const DARK_CLONE_TINT: Rgba = Rgba::new(0.331, 0.331, 0.331, 1.0);

/// Seconds a dropped piece's clone stays on the board.
pub const CLONE_LINGER_SECONDS: f32 = 4.0;

#[derive(Debug, Default)]
pub struct GhostPickup {
    clone: Option<VisualId>,
}

impl GhostPickup {
    pub fn new() -> Self {
        GhostPickup::default()
    }

    pub fn clone_id(&self) -> Option<VisualId> {
        self.clone
    }

    /// Called when a piece is picked up: stage a placeholder clone on its
    /// square and freeze physics on both bodies.
    pub fn begin(
        &mut self,
        stage: &mut Stage,
        original: VisualId,
        color: Color,
    ) -> Option<VisualId> {
        let mut clone_visual = stage.get(original)?.clone();
        clone_visual.material.color = match color {
            Color::Light => LIGHT_CLONE_TINT,
            Color::Dark => DARK_CLONE_TINT,
        };
        clone_visual.kinematic = true;
        clone_visual.detect_collisions = false;

        if let Some(visual) = stage.get_mut(original) {
            visual.kinematic = true;
            visual.detect_collisions = false;
        }

        let clone = stage.spawn(clone_visual);
        self.clone = Some(clone);
        debug!(?original, ?clone, "ghost pickup started");
        Some(clone)
    }

    /// Called when the piece is dropped: restore its physics and let the
    /// clone linger before despawning.
    pub fn end(&mut self, stage: &mut Stage, scheduler: &mut Scheduler, original: VisualId) {
        if let Some(visual) = stage.get_mut(original) {
            visual.kinematic = false;
            visual.detect_collisions = true;
        }
        if let Some(clone) = self.clone {
            scheduler.play(
                clone,
                TrackTag::DespawnDelay,
                Box::new(Delay::seconds(CLONE_LINGER_SECONDS)),
            );
        }
    }

    /// Route scheduler completions; despawns the clone when its linger timer
    /// fires. Returns whether the completion belonged to this pickup.
    pub fn handle_completion(&mut self, stage: &mut Stage, completion: Completion) -> bool {
        if completion.tag != TrackTag::DespawnDelay || self.clone != Some(completion.target) {
            return false;
        }
        stage.despawn(completion.target);
        self.clone = None;
        debug!(clone = ?completion.target, "ghost clone destroyed");
        true
    }

    /// Destroy the clone immediately (reset, new pickup, shutdown).
    pub fn destroy_clone(&mut self, stage: &mut Stage) {
        if let Some(clone) = self.clone.take() {
            stage.despawn(clone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::visual::{MaterialPalette, PieceVisual};
    use crate::game_state::chess_types::BoardLocation;

    fn staged_piece(stage: &mut Stage) -> VisualId {
        let square = BoardLocation::new(4, 0).expect("e1 is on the board");
        stage.spawn(PieceVisual::at_square(
            square,
            Color::Light,
            &MaterialPalette::default(),
        ))
    }

    #[test]
    fn pickup_spawns_a_tinted_frozen_clone() {
        let mut stage = Stage::new();
        let mut ghost = GhostPickup::new();
        let original = staged_piece(&mut stage);

        let clone = ghost
            .begin(&mut stage, original, Color::Light)
            .expect("clone spawns");

        let clone_visual = stage.get(clone).expect("clone is staged");
        assert_eq!(clone_visual.material.color, LIGHT_CLONE_TINT);
        assert!(clone_visual.kinematic);
        assert!(!clone_visual.detect_collisions);
        assert!(stage.get(original).expect("original staged").kinematic);
    }

    #[test]
    fn drop_restores_physics_and_despawns_after_the_linger() {
        let mut stage = Stage::new();
        let mut scheduler = Scheduler::new();
        let mut ghost = GhostPickup::new();
        let original = staged_piece(&mut stage);

        ghost.begin(&mut stage, original, Color::Dark);
        ghost.end(&mut stage, &mut scheduler, original);
        assert!(!stage.get(original).expect("original staged").kinematic);

        let clone = ghost.clone_id().expect("clone still staged");
        let mut elapsed = 0.0;
        let mut handled = false;
        while elapsed < CLONE_LINGER_SECONDS + 1.0 {
            for completion in scheduler.tick(0.5, &mut stage) {
                handled |= ghost.handle_completion(&mut stage, completion);
            }
            elapsed += 0.5;
        }

        assert!(handled);
        assert!(stage.get(clone).is_none());
        assert_eq!(ghost.clone_id(), None);
    }
}
