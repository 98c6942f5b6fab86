use crate::core::prelude::*;
use tracing::debug;

/// The player's car. Lane switches requested by tilt input are latched and
/// applied on the next tick, matching the one-frame transition of the
/// on-screen car.
#[derive(Debug)]
pub struct Hero {
    lane: Lane,
    transition_to_left: bool,
    transition_to_right: bool,
}

impl Hero {
    pub fn new() -> Self {
        Self {
            lane: Lane::Right,
            transition_to_left: false,
            transition_to_right: false,
        }
    }

    /// Interprets a gravity-sensor reading along the device's y axis.
    /// Only a motion towards the opposite lane arms a transition.
    pub fn handle_tilt(&mut self, gravity_y: f32) {
        if gravity_y > TILT_THRESHOLD && self.lane == Lane::Left {
            debug!("right motion");
            self.transition_to_right = true;
        }
        if gravity_y < -TILT_THRESHOLD && self.lane == Lane::Right {
            debug!("left motion");
            self.transition_to_left = true;
        }
    }

    pub fn apply_transition(&mut self) {
        match self.lane {
            Lane::Right if self.transition_to_left => {
                self.lane = Lane::Left;
                self.transition_to_left = false;
            }
            Lane::Left if self.transition_to_right => {
                self.lane = Lane::Right;
                self.transition_to_right = false;
            }
            _ => {}
        }
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}
