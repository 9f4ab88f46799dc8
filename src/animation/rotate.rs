//! Rotation correction running concurrently with travel.

use glam::Quat;

use crate::animation::tween::{clamp01, Animation, Progress};
use crate::animation::visual::{upright_rotation, PieceVisual};
use crate::game_state::chess_types::Color;

#[derive(Debug)]
pub struct Rotate {
    target: Quat,
    duration: f32,
    elapsed: f32,
    start: Option<Quat>,
}

impl Rotate {
    /// Slerp to the side's upright orientation over `duration` seconds.
    pub fn to_upright(color: Color, duration: f32) -> Self {
        Rotate {
            target: upright_rotation(color),
            duration,
            elapsed: 0.0,
            start: None,
        }
    }
}

impl Animation for Rotate {
    fn tick(&mut self, dt: f32, visual: &mut PieceVisual) -> Progress {
        let start = *self.start.get_or_insert(visual.rotation);

        self.elapsed += dt;
        let blend = clamp01(self.elapsed / self.duration);
        visual.rotation = start.slerp(self.target, blend);

        if self.elapsed < self.duration {
            Progress::Running
        } else {
            Progress::Finished
        }
    }
}
