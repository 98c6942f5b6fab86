use crate::core::prelude::*;

pub mod clock;
pub mod hero;
pub mod hud;
pub mod menu;
pub mod obstacle;
pub mod race;
pub mod ranking;
pub mod world;

use menu::{MenuAction, MenuScreen};
use race::{RaceScreen, RaceSignal};
use ranking::Ranking;

/// One of the two fixed tracks of the street.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Lane {
    Left,
    Right,
}

/// Input already decoded by the platform layer: taps arrive unprojected
/// into the active camera's world space, tilts as raw gravity-sensor
/// readings along the device's y axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    TapDown(Vec2),
    Tilt(f32),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameState {
    Menu,
    Race,
}

/// Top-level state machine. Owns both screens and the ranking board, and
/// routes the per-tick input batch to whichever screen is active.
#[derive(Debug)]
pub struct Game {
    state: GameState,
    menu: MenuScreen,
    race: RaceScreen,
    ranking: Ranking,
}

impl Game {
    pub fn new() -> Self {
        Self::with_race(RaceScreen::new())
    }

    pub fn with_race(race: RaceScreen) -> Self {
        Self {
            state: GameState::Menu,
            menu: MenuScreen::new(),
            race,
            ranking: Ranking::new(),
        }
    }

    pub fn update(&mut self, events: &[InputEvent]) {
        match self.state {
            GameState::Menu => {
                for event in events {
                    if let InputEvent::TapDown(tap) = event {
                        if self.menu.handle_tap(*tap) == Some(MenuAction::StartRace) {
                            self.state = GameState::Race;
                        }
                    }
                }
            }
            GameState::Race => {
                if self.race.update(events, &mut self.ranking) == Some(RaceSignal::BackToMenu) {
                    info!("back to menu");
                    self.state = GameState::Menu;
                }
            }
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }
    pub fn menu(&self) -> &MenuScreen {
        &self.menu
    }
    pub fn race(&self) -> &RaceScreen {
        &self.race
    }
    pub fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    #[cfg(test)]
    pub(crate) fn race_mut(&mut self) -> &mut RaceScreen {
        &mut self.race
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::clock::SurvivalClock;
    use std::time::Duration;

    fn fast_game() -> Game {
        Game::with_race(RaceScreen::with_clock(SurvivalClock::with_tick(
            Duration::from_millis(1),
        )))
    }

    // Centre of the main menu's start button.
    const START_TAP: Vec2 = Vec2 { x: 190., y: -35. };

    #[test]
    fn starts_in_menu() {
        assert_eq!(Game::new().state(), GameState::Menu);
    }

    #[test]
    fn start_button_enters_race() {
        let mut game = fast_game();
        game.update(&[InputEvent::TapDown(START_TAP)]);
        assert_eq!(game.state(), GameState::Race);
    }

    #[test]
    fn crash_then_menu_button_returns_to_menu() {
        let mut game = fast_game();
        game.update(&[InputEvent::TapDown(START_TAP)]);

        game.race_mut().force_running();
        game.race_mut()
            .obstacle_mut()
            .force_state(Lane::Right, BASE_SCROLL_SPEED);
        for _ in 0..1000 {
            game.update(&[]);
            if game.race().hud().accident_happened() {
                break;
            }
        }
        assert!(game.race().hud().accident_happened());

        game.update(&[InputEvent::TapDown(Vec2 { x: 45., y: -47.5 })]);
        assert_eq!(game.state(), GameState::Menu);
        assert!(!game.race().hud().accident_happened());
    }

    #[test]
    fn race_ignores_menu_coordinates() {
        let mut game = fast_game();
        game.update(&[InputEvent::TapDown(START_TAP)]);
        // Same tap again: no crash screen is up, so nothing happens.
        game.update(&[InputEvent::TapDown(START_TAP)]);
        assert_eq!(game.state(), GameState::Race);
    }
}
