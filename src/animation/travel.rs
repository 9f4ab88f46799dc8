//! Lift-traverse-descend travel state machine for moved pieces.
//!
//! Long moves rise to the hover height, cross above the board, and descend
//! onto the destination. Moves of at most one square, and explicit slides,
//! skip the airborne phases and glide directly at 1.5x the phase duration.
//! Physics stays frozen for the whole flight.

use glam::Vec3;

use crate::animation::tween::{clamp01, Animation, Progress};
use crate::animation::visual::{PieceVisual, HOVER_HEIGHT};

pub const TRAVEL_PHASE_DURATION: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TravelPhase {
    Lift,
    Traverse,
    Descend,
}

#[derive(Debug)]
pub struct Travel {
    end: Vec3,
    slide: bool,
    duration: f32,
    phase: TravelPhase,
    elapsed: f32,
    /// Phase waypoints, captured from the visual on the first tick.
    waypoints: Option<Waypoints>,
}

#[derive(Debug, Clone, Copy)]
struct Waypoints {
    start: Vec3,
    lift_top: Vec3,
    descend_from: Vec3,
}

impl Travel {
    pub fn to(end: Vec3) -> Self {
        Travel {
            end,
            slide: false,
            duration: TRAVEL_PHASE_DURATION,
            phase: TravelPhase::Lift,
            elapsed: 0.0,
            waypoints: None,
        }
    }

    /// Glide along the surface regardless of distance.
    pub fn sliding_to(end: Vec3) -> Self {
        Travel {
            slide: true,
            ..Travel::to(end)
        }
    }

    fn capture_waypoints(&mut self, visual: &mut PieceVisual) -> Waypoints {
        let start = visual.position;
        visual.kinematic = true;
        visual.detect_collisions = false;

        let adjacent =
            (start.x - self.end.x).abs() <= 1.0 && (start.z - self.end.z).abs() <= 1.0;
        if adjacent || self.slide {
            self.phase = TravelPhase::Descend;
            self.duration *= 1.5;
            Waypoints {
                start,
                lift_top: start,
                descend_from: start,
            }
        } else {
            Waypoints {
                start,
                lift_top: Vec3::new(start.x, HOVER_HEIGHT, start.z),
                descend_from: Vec3::new(self.end.x, HOVER_HEIGHT, self.end.z),
            }
        }
    }
}

impl Animation for Travel {
    fn tick(&mut self, dt: f32, visual: &mut PieceVisual) -> Progress {
        let waypoints = match self.waypoints {
            Some(w) => w,
            None => {
                let w = self.capture_waypoints(visual);
                self.waypoints = Some(w);
                w
            }
        };

        self.elapsed += dt;
        let blend = clamp01(self.elapsed / self.duration);
        let (from, to) = match self.phase {
            TravelPhase::Lift => (waypoints.start, waypoints.lift_top),
            TravelPhase::Traverse => (waypoints.lift_top, waypoints.descend_from),
            TravelPhase::Descend => (waypoints.descend_from, self.end),
        };
        visual.position = from.lerp(to, blend);

        if self.elapsed < self.duration {
            return Progress::Running;
        }

        match self.phase {
            TravelPhase::Lift => {
                self.phase = TravelPhase::Traverse;
                self.elapsed = 0.0;
                Progress::Running
            }
            TravelPhase::Traverse => {
                self.phase = TravelPhase::Descend;
                self.elapsed = 0.0;
                Progress::Running
            }
            TravelPhase::Descend => {
                visual.position = self.end;
                visual.detect_collisions = true;
                visual.kinematic = false;
                Progress::Finished
            }
        }
    }
}
