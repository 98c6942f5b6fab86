use crate::core::prelude::*;

use crate::game::ranking::format_time;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HudAction {
    Restart,
    BackToMenu,
}

/// In-game overlay state: the countdown text, the running timer, and the
/// crash screen with its two buttons. Button boxes live in the HUD camera's
/// orthographic space (x and y in -100..100); taps arrive already
/// unprojected into that space.
#[derive(Debug)]
pub struct Hud {
    crash_buttons: [(Aabb, HudAction); 2],
    accident_happened: bool,
    countdown_ms: u32,
    timer_ms: u32,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            crash_buttons: [
                (
                    Aabb::from_top_left(Vec2 { x: -80., y: -60. }, Vec2 { x: 70., y: 25. }),
                    HudAction::Restart,
                ),
                (
                    Aabb::from_top_left(Vec2 { x: 20., y: -60. }, Vec2 { x: 50., y: 25. }),
                    HudAction::BackToMenu,
                ),
            ],
            accident_happened: false,
            countdown_ms: 0,
            timer_ms: 0,
        }
    }

    /// Tests a tap-down against the crash buttons, first hit wins. Only
    /// meaningful while the crash screen is up.
    pub fn hit_test(&self, tap: Vec2) -> Option<HudAction> {
        let tap = Point::new(tap);
        self.crash_buttons
            .iter()
            .find(|(bounds, _)| tap.intersects_aabb(bounds))
            .map(|(_, action)| *action)
    }

    pub fn accident_happened(&self) -> bool {
        self.accident_happened
    }
    pub fn set_accident_happened(&mut self, accident_happened: bool) {
        self.accident_happened = accident_happened;
    }

    pub fn set_countdown(&mut self, millis: u32) {
        self.countdown_ms = millis;
    }

    /// The start text for the countdown phase, if any is showing.
    pub fn countdown_text(&self) -> Option<&'static str> {
        match self.countdown_ms {
            0 => Some("ready?"),
            1000 => Some("set..."),
            m if m > 1000 && m < 3000 => Some("go!"),
            _ => None,
        }
    }

    pub fn set_timer(&mut self, millis: u32) {
        self.timer_ms = millis;
    }
    pub fn timer_ms(&self) -> u32 {
        self.timer_ms
    }
    pub fn timer_text(&self) -> Result<String> {
        format_time(self.timer_ms)
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
