//! Mutable visual state animations write into.
//!
//! A `PieceVisual` is the transform/material/physics snapshot of one piece
//! (or one transient clone). Animations are the only writers while they run;
//! the driver is single-threaded and cooperative, so concurrent tracks over
//! the same visual interleave per tick rather than racing.

use glam::{EulerRot, Quat, Vec3};

use crate::game_state::chess_types::{BoardLocation, Color};

/// Height pieces travel at while crossing the board.
pub const HOVER_HEIGHT: f32 = 2.0;

/// Straight RGBA color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    pub fn lerp(self, target: Self, t: f32) -> Self {
        Rgba {
            r: self.r + (target.r - self.r) * t,
            g: self.g + (target.g - self.g) * t,
            b: self.b + (target.b - self.b) * t,
            a: self.a + (target.a - self.a) * t,
        }
    }
}

/// Blending mode of a piece's material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Opaque,
    Transparent,
}

/// The material values the fade animation interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialValues {
    pub color: Rgba,
    pub metallic: f32,
    pub gloss: f32,
    pub render_mode: RenderMode,
}

/// Per-side surface finish targets used when fading pieces back in.
#[derive(Debug, Clone, Copy)]
pub struct MaterialPalette {
    pub light_metallic: f32,
    pub light_gloss: f32,
    pub dark_metallic: f32,
    pub dark_gloss: f32,
}

impl Default for MaterialPalette {
    fn default() -> Self {
        MaterialPalette {
            light_metallic: 0.185,
            light_gloss: 1.0,
            dark_metallic: 0.045,
            dark_gloss: 0.511,
        }
    }
}

impl MaterialPalette {
    pub fn metallic_for(&self, color: Color) -> f32 {
        match color {
            Color::Light => self.light_metallic,
            Color::Dark => self.dark_metallic,
        }
    }

    pub fn gloss_for(&self, color: Color) -> f32 {
        match color {
            Color::Light => self.light_gloss,
            Color::Dark => self.dark_gloss,
        }
    }
}

/// Transform, material, and physics state of one visual.
#[derive(Debug, Clone)]
pub struct PieceVisual {
    pub position: Vec3,
    pub rotation: Quat,
    pub material: MaterialValues,
    /// While true, physics no longer drives the piece; animations own it.
    pub kinematic: bool,
    pub detect_collisions: bool,
    pub active: bool,
}

impl PieceVisual {
    /// Resting visual for a piece standing on `location`.
    pub fn at_square(location: BoardLocation, color: Color, palette: &MaterialPalette) -> Self {
        PieceVisual {
            position: square_to_world(location),
            rotation: upright_rotation(color),
            material: MaterialValues {
                color: Rgba::new(1.0, 1.0, 1.0, 1.0),
                metallic: palette.metallic_for(color),
                gloss: palette.gloss_for(color),
                render_mode: RenderMode::Opaque,
            },
            kinematic: false,
            detect_collisions: true,
            active: true,
        }
    }
}

/// Board square to world-space resting position.
#[inline]
pub fn square_to_world(location: BoardLocation) -> Vec3 {
    Vec3::new(location.file as f32, 0.0, location.rank as f32)
}

/// Upright orientation for a piece of the given color; the two sides face
/// each other across the board.
#[inline]
pub fn upright_rotation(color: Color) -> Quat {
    let yaw = match color {
        Color::Light => 180f32.to_radians(),
        Color::Dark => 0.0,
    };
    Quat::from_euler(EulerRot::XYZ, (-90f32).to_radians(), yaw, 0.0)
}
