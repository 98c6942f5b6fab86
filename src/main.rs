use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use tracing::info;

use lanerush::core::config::BASE_SCROLL_SPEED;
use lanerush::game::clock::SurvivalClock;
use lanerush::game::race::RaceScreen;
use lanerush::game::ranking::format_time;
use lanerush::game::{Game, GameState, InputEvent};
use lanerush::util::linalg::Vec2;
use lanerush::util::setup_log;

// Button centres in the menu and HUD camera spaces.
const MENU_START: Vec2 = Vec2 { x: 190., y: -35. };
const HUD_MENU: Vec2 = Vec2 { x: 45., y: -47.5 };

/// Headless scripted race: start from the menu, drive until the obstacle
/// catches the hero, then read the crash screen back to the menu.
fn main() -> Result<()> {
    setup_log()?;

    // Accelerated survival clock so the demo finishes in seconds.
    let clock = SurvivalClock::with_tick(Duration::from_millis(50));
    let mut game = Game::with_race(RaceScreen::with_clock(clock));

    info!("tapping start");
    game.update(&[InputEvent::TapDown(MENU_START)]);
    if game.state() != GameState::Race {
        bail!("start tap did not enter the race");
    }

    let deadline = Instant::now() + Duration::from_secs(30);
    let mut swerved = false;
    while !game.race().hud().accident_happened() {
        if Instant::now() > deadline {
            bail!("demo race never crashed");
        }
        // One evasive swerve partway down the first approach, then let the
        // obstacle catch up.
        if !swerved && game.race().obstacle().depth() > 20. * BASE_SCROLL_SPEED {
            game.update(&[InputEvent::Tilt(-3.0)]);
            swerved = true;
        } else {
            game.update(&[]);
        }
        thread::sleep(Duration::from_millis(1));
    }

    let survived = game.race().hud().timer_ms();
    info!("crashed after {}", format_time(survived)?);
    for (place, &time) in game.ranking().entries().iter().enumerate() {
        info!("  {}. {}", place + 1, format_time(time)?);
    }

    game.update(&[InputEvent::TapDown(HUD_MENU)]);
    if game.state() != GameState::Menu {
        bail!("menu tap did not leave the crash screen");
    }
    info!("back at the menu");
    Ok(())
}
