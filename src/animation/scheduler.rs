//! Cooperative single-driver animation scheduling.
//!
//! The stage owns every visual; the scheduler owns the running tracks and
//! advances them all from one `tick` call. Tracks targeting the same visual
//! interleave per tick in insertion order, which is the only interleaving
//! there is: no preemption, no threads, no locks. Stopping a target's tracks
//! or despawning the target is the cancellation model.

use crate::animation::tween::{Animation, Progress};
use crate::animation::visual::PieceVisual;

/// Handle to a visual on the stage. Piece visuals keep a stable slot;
/// transient clones allocate fresh slots and vacate them on despawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualId(pub usize);

/// What a finished track was doing, for routing completion events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackTag {
    Fade,
    Travel,
    Rotate,
    Forfeit,
    DespawnDelay,
}

/// The set of visuals animations write into.
#[derive(Debug, Default)]
pub struct Stage {
    visuals: Vec<Option<PieceVisual>>,
}

impl Stage {
    pub fn new() -> Self {
        Stage::default()
    }

    pub fn spawn(&mut self, visual: PieceVisual) -> VisualId {
        if let Some(slot) = self.visuals.iter().position(Option::is_none) {
            self.visuals[slot] = Some(visual);
            VisualId(slot)
        } else {
            self.visuals.push(Some(visual));
            VisualId(self.visuals.len() - 1)
        }
    }

    pub fn despawn(&mut self, id: VisualId) {
        if let Some(slot) = self.visuals.get_mut(id.0) {
            *slot = None;
        }
    }

    pub fn get(&self, id: VisualId) -> Option<&PieceVisual> {
        self.visuals.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: VisualId) -> Option<&mut PieceVisual> {
        self.visuals.get_mut(id.0).and_then(Option::as_mut)
    }
}

struct Track {
    target: VisualId,
    tag: TrackTag,
    animation: Box<dyn Animation>,
}

/// A track that completed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub target: VisualId,
    pub tag: TrackTag,
}

#[derive(Default)]
pub struct Scheduler {
    tracks: Vec<Track>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler::default()
    }

    pub fn play(&mut self, target: VisualId, tag: TrackTag, animation: Box<dyn Animation>) {
        self.tracks.push(Track {
            target,
            tag,
            animation,
        });
    }

    /// Halt every track owned by `target` without completion events.
    pub fn stop_all(&mut self, target: VisualId) {
        self.tracks.retain(|t| t.target != target);
    }

    pub fn is_animating(&self, target: VisualId) -> bool {
        self.tracks.iter().any(|t| t.target == target)
    }

    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Advance every running track by `dt` seconds and collect completions.
    ///
    /// Tracks whose target visual has been despawned are dropped silently,
    /// which is how destroying a piece halts its animations.
    pub fn tick(&mut self, dt: f32, stage: &mut Stage) -> Vec<Completion> {
        let mut completed = Vec::new();
        let mut index = 0;

        while index < self.tracks.len() {
            let track = &mut self.tracks[index];
            let Some(visual) = stage.get_mut(track.target) else {
                self.tracks.remove(index);
                continue;
            };

            match track.animation.tick(dt, visual) {
                Progress::Running => index += 1,
                Progress::Finished => {
                    completed.push(Completion {
                        target: track.target,
                        tag: track.tag,
                    });
                    self.tracks.remove(index);
                }
            }
        }

        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::delay::Delay;
    use crate::animation::rotate::Rotate;
    use crate::animation::travel::Travel;
    use crate::animation::visual::{square_to_world, MaterialPalette, PieceVisual};
    use crate::game_state::chess_types::{BoardLocation, Color};

    fn spawn_at(stage: &mut Stage, file: i8, rank: i8) -> VisualId {
        let square = BoardLocation::new(file, rank).expect("test squares are on the board");
        stage.spawn(PieceVisual::at_square(
            square,
            Color::Light,
            &MaterialPalette::default(),
        ))
    }

    #[test]
    fn concurrent_travel_and_rotate_share_one_visual() {
        let mut stage = Stage::new();
        let mut scheduler = Scheduler::new();
        let id = spawn_at(&mut stage, 0, 0);
        let end = square_to_world(BoardLocation::new(5, 5).unwrap());

        scheduler.play(id, TrackTag::Travel, Box::new(Travel::to(end)));
        scheduler.play(id, TrackTag::Rotate, Box::new(Rotate::to_upright(Color::Light, 0.75)));
        assert!(scheduler.is_animating(id));

        let mut completions = Vec::new();
        for _ in 0..200 {
            completions.extend(scheduler.tick(0.05, &mut stage));
            if scheduler.is_idle() {
                break;
            }
        }

        assert!(scheduler.is_idle());
        assert_eq!(completions.len(), 2);
        assert_eq!(stage.get(id).expect("visual still staged").position, end);
    }

    #[test]
    fn despawning_the_target_halts_its_tracks() {
        let mut stage = Stage::new();
        let mut scheduler = Scheduler::new();
        let id = spawn_at(&mut stage, 0, 0);

        scheduler.play(id, TrackTag::DespawnDelay, Box::new(Delay::seconds(10.0)));
        stage.despawn(id);

        let completions = scheduler.tick(0.05, &mut stage);
        assert!(completions.is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn stop_all_cancels_without_completions() {
        let mut stage = Stage::new();
        let mut scheduler = Scheduler::new();
        let id = spawn_at(&mut stage, 0, 0);

        scheduler.play(id, TrackTag::DespawnDelay, Box::new(Delay::seconds(10.0)));
        scheduler.stop_all(id);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn delay_completion_carries_its_tag() {
        let mut stage = Stage::new();
        let mut scheduler = Scheduler::new();
        let id = spawn_at(&mut stage, 0, 0);

        scheduler.play(id, TrackTag::DespawnDelay, Box::new(Delay::seconds(0.1)));
        let completions = scheduler.tick(0.2, &mut stage);
        assert_eq!(
            completions,
            vec![Completion {
                target: id,
                tag: TrackTag::DespawnDelay
            }]
        );
    }

    #[test]
    fn stage_reuses_vacated_slots() {
        let mut stage = Stage::new();
        let first = spawn_at(&mut stage, 0, 0);
        let _second = spawn_at(&mut stage, 1, 0);
        stage.despawn(first);
        let third = spawn_at(&mut stage, 2, 0);
        assert_eq!(third, first);
    }
}
