//! Piece highlight colors for touch and grab feedback.
//!
//! The resting color is captured once and restored when the highlight goes
//! off, so repeated highlights never compound.

use crate::animation::visual::{PieceVisual, Rgba};

pub const TOUCH_HIGHLIGHT: Rgba = Rgba::new(195.0 / 255.0, 156.0 / 255.0, 200.0 / 255.0, 50.0 / 255.0);
pub const GRAB_HIGHLIGHT: Rgba = Rgba::new(155.0 / 255.0, 90.0 / 255.0, 170.0 / 255.0, 130.0 / 255.0);

#[derive(Debug, Clone)]
pub struct Highlight {
    start_color: Rgba,
}

impl Highlight {
    /// Remember the visual's current color as its resting color.
    pub fn capture(visual: &PieceVisual) -> Self {
        Highlight {
            start_color: visual.material.color,
        }
    }

    pub fn touch_on(&self, visual: &mut PieceVisual) {
        visual.material.color = TOUCH_HIGHLIGHT;
    }

    pub fn grab_on(&self, visual: &mut PieceVisual) {
        visual.material.color = GRAB_HIGHLIGHT;
    }

    pub fn off(&self, visual: &mut PieceVisual) {
        visual.material.color = self.start_color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::visual::MaterialPalette;
    use crate::game_state::chess_types::{BoardLocation, Color};

    #[test]
    fn highlight_off_restores_the_resting_color() {
        let square = BoardLocation::new(0, 0).expect("a1 is on the board");
        let mut visual =
            PieceVisual::at_square(square, Color::Light, &MaterialPalette::default());
        let resting = visual.material.color;

        let highlight = Highlight::capture(&visual);
        highlight.touch_on(&mut visual);
        assert_eq!(visual.material.color, TOUCH_HIGHLIGHT);
        highlight.grab_on(&mut visual);
        assert_eq!(visual.material.color, GRAB_HIGHLIGHT);
        highlight.off(&mut visual);
        assert_eq!(visual.material.color, resting);
    }
}
