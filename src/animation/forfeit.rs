//! Topple animation played on a forfeiting side's king.

use glam::{EulerRot, Quat};
use rand::Rng;

use crate::animation::tween::{clamp01, Animation, Progress};
use crate::animation::visual::PieceVisual;

pub const FORFEIT_DURATION: f32 = 1.0;

#[derive(Debug)]
pub struct Forfeit {
    target: Quat,
    elapsed: f32,
    start: Option<Quat>,
}

impl Forfeit {
    /// Topple in a random compass direction.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::with_fall_direction(rng.random_range(0..360))
    }

    /// Topple toward the given yaw angle in degrees.
    pub fn with_fall_direction(degrees: i32) -> Self {
        let yaw = (degrees as f32).to_radians();
        Forfeit {
            target: Quat::from_euler(
                EulerRot::XYZ,
                (-90f32).to_radians(),
                yaw,
                90f32.to_radians(),
            ),
            elapsed: 0.0,
            start: None,
        }
    }
}

impl Animation for Forfeit {
    fn tick(&mut self, dt: f32, visual: &mut PieceVisual) -> Progress {
        let start = *self.start.get_or_insert(visual.rotation);

        self.elapsed += dt;
        let blend = clamp01(self.elapsed / FORFEIT_DURATION);
        visual.rotation = start.slerp(self.target, blend);

        if self.elapsed < FORFEIT_DURATION {
            Progress::Running
        } else {
            Progress::Finished
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::visual::MaterialPalette;
    use crate::game_state::chess_types::{BoardLocation, Color};

    #[test]
    fn the_king_ends_up_toppled() {
        let square = BoardLocation::new(4, 0).expect("e1 is on the board");
        let mut visual =
            PieceVisual::at_square(square, Color::Light, &MaterialPalette::default());
        let upright = visual.rotation;

        let mut forfeit = Forfeit::with_fall_direction(135);
        let mut ticks = 0;
        while forfeit.tick(0.1, &mut visual) == Progress::Running {
            ticks += 1;
            assert!(ticks < 100, "forfeit never finished");
        }

        assert!(visual.rotation.angle_between(upright) > 0.5);
    }
}
