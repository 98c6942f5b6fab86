use crate::core::prelude::*;

/// The scrolling street. Rendering lives elsewhere; the world contributes
/// the scroll speed that the difficulty schedule drives.
#[derive(Debug)]
pub struct World {
    scroll_speed: f32,
}

impl World {
    pub fn new() -> Self {
        Self {
            scroll_speed: BASE_SCROLL_SPEED,
        }
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }
    pub fn set_scroll_speed(&mut self, speed: f32) {
        self.scroll_speed = speed;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
