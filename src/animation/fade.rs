//! Material fade state machine for eliminating and reviving pieces.
//!
//! Fading out switches the material to transparent blending, freezes physics,
//! interpolates opacity/metallic/gloss down to zero, and deactivates the
//! visual on completion. Fading in runs the same interpolation toward the
//! side's surface finish and restores opaque rendering and physics at the end.

use crate::animation::tween::{clamp01, lerp_f32, Animation, Progress};
use crate::animation::visual::{MaterialPalette, PieceVisual, RenderMode};
use crate::game_state::chess_types::Color;

pub const FADE_DURATION: f32 = 1.0;

#[derive(Debug, Clone, Copy)]
struct MaterialTargets {
    opacity: f32,
    metallic: f32,
    gloss: f32,
}

#[derive(Debug)]
pub struct Fade {
    target: MaterialTargets,
    duration: f32,
    elapsed: f32,
    /// Captured from the visual on the first tick.
    start: Option<MaterialTargets>,
}

impl Fade {
    /// Fade a captured piece off the board.
    pub fn out() -> Self {
        Fade {
            target: MaterialTargets {
                opacity: 0.0,
                metallic: 0.0,
                gloss: 0.0,
            },
            duration: FADE_DURATION,
            elapsed: 0.0,
            start: None,
        }
    }

    /// Fade a revived piece back in with its side's surface finish.
    pub fn back_in(color: Color, palette: &MaterialPalette) -> Self {
        Fade {
            target: MaterialTargets {
                opacity: 1.0,
                metallic: palette.metallic_for(color),
                gloss: palette.gloss_for(color),
            },
            duration: FADE_DURATION,
            elapsed: 0.0,
            start: None,
        }
    }

    fn fading_out(&self) -> bool {
        self.target.opacity == 0.0
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: f32, visual: &mut PieceVisual) -> Progress {
        let start = *self.start.get_or_insert_with(|| {
            visual.kinematic = true;
            visual.detect_collisions = false;
            visual.material.render_mode = RenderMode::Transparent;
            MaterialTargets {
                opacity: visual.material.color.a,
                metallic: visual.material.metallic,
                gloss: visual.material.gloss,
            }
        });

        self.elapsed += dt;
        let blend = clamp01(self.elapsed / self.duration);
        visual.material.color.a = lerp_f32(start.opacity, self.target.opacity, blend);
        visual.material.metallic = lerp_f32(start.metallic, self.target.metallic, blend);
        visual.material.gloss = lerp_f32(start.gloss, self.target.gloss, blend);

        if self.elapsed < self.duration {
            return Progress::Running;
        }

        if self.fading_out() {
            visual.active = false;
        } else {
            visual.material.render_mode = RenderMode::Opaque;
            visual.detect_collisions = true;
            visual.kinematic = false;
        }
        Progress::Finished
    }
}
