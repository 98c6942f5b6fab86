use crate::core::prelude::*;
use rand::Rng;

/// Oncoming traffic. A single obstacle travels down the track towards the
/// hero; when its depth wraps to zero it respawns on a random lane.
#[derive(Debug)]
pub struct Obstacle {
    depth: f32,
    speed: f32,
    lane: Lane,
}

impl Obstacle {
    pub fn new() -> Self {
        Self {
            depth: 0.,
            speed: BASE_SCROLL_SPEED,
            lane: Lane::Right,
        }
    }

    /// Advances one tick: redraws the lane at the start of an approach,
    /// then steps the depth by the current speed, wrapping past the track
    /// end.
    pub fn advance(&mut self) {
        if self.depth == 0. {
            self.lane = if rand::thread_rng().gen_range(0..2) == 0 {
                Lane::Right
            } else {
                Lane::Left
            };
        }

        if self.depth <= TRACK_DEPTH {
            self.depth += self.speed;
        } else {
            self.depth = 0.;
        }
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }
    pub fn reset_depth(&mut self) {
        self.depth = 0.;
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    #[cfg(test)]
    pub(crate) fn force_state(&mut self, lane: Lane, depth: f32) {
        self.lane = lane;
        self.depth = depth;
    }
}

impl Default for Obstacle {
    fn default() -> Self {
        Self::new()
    }
}
