use crate::core::prelude::*;

use crate::game::{
    clock::SurvivalClock,
    hero::Hero,
    hud::{Hud, HudAction},
    obstacle::Obstacle,
    ranking::Ranking,
    world::World,
};

/// Signal back to the game loop that the race screen wants a state change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RaceSignal {
    BackToMenu,
}

/// The in-game screen: runs the countdown, ticks the simulation, and
/// evaluates the lane-collision rule once per tick.
#[derive(Debug)]
pub struct RaceScreen {
    hero: Hero,
    obstacle: Obstacle,
    world: World,
    clock: SurvivalClock,
    hud: Hud,
    running: bool,
    // One-shot per approach: armed when a crash triggers, cleared when the
    // obstacle's depth returns to zero.
    crash_latched: bool,
}

impl RaceScreen {
    pub fn new() -> Self {
        Self::with_clock(SurvivalClock::new())
    }

    pub fn with_clock(clock: SurvivalClock) -> Self {
        Self {
            hero: Hero::new(),
            obstacle: Obstacle::new(),
            world: World::new(),
            clock,
            hud: Hud::new(),
            running: false,
            crash_latched: false,
        }
    }

    /// One simulation tick. Input events are drained first, then the
    /// countdown/crash state machinery, then the moving parts.
    pub fn update(&mut self, events: &[InputEvent], ranking: &mut Ranking) -> Option<RaceSignal> {
        let mut signal = None;
        for event in events {
            match *event {
                InputEvent::Tilt(gravity_y) => self.hero.handle_tilt(gravity_y),
                InputEvent::TapDown(tap) => {
                    if self.hud.accident_happened() {
                        match self.hud.hit_test(tap) {
                            Some(HudAction::Restart) => self.restart(ranking),
                            Some(HudAction::BackToMenu) => {
                                self.restart(ranking);
                                signal = Some(RaceSignal::BackToMenu);
                            }
                            None => {}
                        }
                    }
                }
            }
        }

        // Leaving for the menu: do not restart the countdown clock.
        if signal.is_some() {
            return signal;
        }

        if !self.running && !self.hud.accident_happened() {
            self.clock.start();
            let millis = self.clock.millis();
            self.hud.set_countdown(millis);
            if millis >= START_DELAY_MS {
                self.running = true;
                info!("race started");
            }
        }

        if self.running {
            if self.check_collision() {
                self.on_crash(ranking);
            } else {
                self.apply_difficulty(self.clock.millis());
                self.hud.set_timer(self.clock.race_millis());
                self.hero.apply_transition();
                self.obstacle.advance();
            }
        }
        signal
    }

    /// The lane-collision rule: a crash happens when the hero shares the
    /// obstacle's lane and the obstacle has closed to the collision depth.
    fn check_collision(&mut self) -> bool {
        if self.obstacle.depth() == 0. {
            self.crash_latched = false;
        }
        if self.crash_latched {
            return false;
        }
        if self.hero.lane() == self.obstacle.lane() && self.obstacle.depth() >= COLLISION_DEPTH {
            self.crash_latched = true;
            return true;
        }
        false
    }

    fn on_crash(&mut self, ranking: &mut Ranking) {
        let survived = self.clock.race_millis();
        self.clock.stop();
        self.clock.reset();
        self.running = false;
        self.hud.set_accident_happened(true);
        self.hud.set_timer(survived);
        ranking.push(survived);
        self.obstacle.reset_depth();
        self.obstacle.set_speed(BASE_SCROLL_SPEED);
        self.world.set_scroll_speed(BASE_SCROLL_SPEED);
        info!("collision detected, survived {survived} ms");
    }

    /// Steps the scroll speed up at the scheduled clock milestones.
    fn apply_difficulty(&mut self, clock_millis: u32) {
        if let Some(&(_, speed)) = DIFFICULTY_SCHEDULE
            .iter()
            .rev()
            .find(|(at, _)| clock_millis >= *at)
        {
            self.world.set_scroll_speed(speed);
            self.obstacle.set_speed(speed);
        }
    }

    /// Clears the crash screen and rolls everything back to the countdown
    /// phase. Also used when leaving for the menu.
    fn restart(&mut self, ranking: &mut Ranking) {
        self.clock.stop();
        self.clock.reset();
        self.hud.set_accident_happened(false);
        self.hud.set_timer(0);
        ranking.re_arm();
        self.running = false;
        self.crash_latched = false;
        self.obstacle.reset_depth();
        self.obstacle.set_speed(BASE_SCROLL_SPEED);
        self.world.set_scroll_speed(BASE_SCROLL_SPEED);
        info!("race restarted");
    }

    pub fn running(&self) -> bool {
        self.running
    }
    pub fn hero(&self) -> &Hero {
        &self.hero
    }
    pub fn obstacle(&self) -> &Obstacle {
        &self.obstacle
    }
    pub fn world(&self) -> &World {
        &self.world
    }
    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    #[cfg(test)]
    pub(crate) fn force_running(&mut self) {
        self.running = true;
    }
    #[cfg(test)]
    pub(crate) fn obstacle_mut(&mut self) -> &mut Obstacle {
        &mut self.obstacle
    }
}

impl Default for RaceScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    fn fast_race() -> RaceScreen {
        RaceScreen::with_clock(SurvivalClock::with_tick(Duration::from_millis(1)))
    }

    fn tick_until_crash(race: &mut RaceScreen, ranking: &mut Ranking) -> u32 {
        let mut ticks = 0;
        while !race.hud().accident_happened() {
            race.update(&[], ranking);
            ticks += 1;
            assert!(ticks < 1000, "no crash within 1000 ticks");
        }
        ticks
    }

    #[test]
    fn same_lane_at_collision_depth_crashes() {
        let mut race = fast_race();
        let mut ranking = Ranking::new();
        race.force_running();
        // Just past the respawn point so the lane draw does not rerun.
        race.obstacle_mut().force_state(Lane::Right, BASE_SCROLL_SPEED);
        assert_eq!(race.hero().lane(), Lane::Right);

        tick_until_crash(&mut race, &mut ranking);
        assert!(!race.running());
        assert_eq!(race.obstacle().depth(), 0.);
        assert_eq!(race.obstacle().speed(), BASE_SCROLL_SPEED);
        assert_eq!(race.world().scroll_speed(), BASE_SCROLL_SPEED);
    }

    #[test]
    fn crash_triggers_at_the_collision_depth_tick() {
        let mut race = fast_race();
        let mut ranking = Ranking::new();
        race.force_running();
        race.obstacle_mut().force_state(Lane::Right, BASE_SCROLL_SPEED);

        // Stepping by the base speed from one step past zero, the crash must
        // land on the first tick at or past the collision depth.
        let ticks = tick_until_crash(&mut race, &mut ranking);
        let expected = (COLLISION_DEPTH / BASE_SCROLL_SPEED) as u32;
        assert!(
            ticks.abs_diff(expected) <= 1,
            "crashed after {ticks} ticks, expected about {expected}"
        );
    }

    #[test]
    fn different_lanes_never_crash() {
        let mut race = fast_race();
        let mut ranking = Ranking::new();
        race.force_running();
        race.obstacle_mut().force_state(Lane::Left, BASE_SCROLL_SPEED);

        // One full pass of the track, including the wrap back to zero.
        for _ in 0..500 {
            race.update(&[], &mut ranking);
            if race.obstacle().depth() == 0. {
                break;
            }
        }
        assert!(!race.hud().accident_happened());
        assert!(race.running());
    }

    #[test]
    fn tilt_events_reach_the_hero() {
        let mut race = fast_race();
        let mut ranking = Ranking::new();
        race.force_running();
        race.obstacle_mut().force_state(Lane::Right, BASE_SCROLL_SPEED);

        race.update(&[InputEvent::Tilt(-3.0)], &mut ranking);
        assert_eq!(race.hero().lane(), Lane::Left);
    }

    #[test]
    fn dodging_prevents_the_crash() {
        let mut race = fast_race();
        let mut ranking = Ranking::new();
        race.force_running();
        race.obstacle_mut().force_state(Lane::Right, BASE_SCROLL_SPEED);

        // Swerve left before the obstacle arrives.
        race.update(&[InputEvent::Tilt(-3.0)], &mut ranking);
        for _ in 0..450 {
            race.update(&[], &mut ranking);
            if race.obstacle().depth() == 0. {
                break;
            }
        }
        assert!(!race.hud().accident_happened());
    }

    #[test]
    fn restart_clears_the_crash_screen() {
        let mut race = fast_race();
        let mut ranking = Ranking::new();
        race.force_running();
        race.obstacle_mut().force_state(Lane::Right, BASE_SCROLL_SPEED);
        tick_until_crash(&mut race, &mut ranking);

        // Tap the restart button's centre.
        race.update(&[InputEvent::TapDown(Vec2 { x: -45., y: -47.5 })], &mut ranking);
        assert!(!race.hud().accident_happened());
        assert!(!race.running());

        // The countdown runs again and the race eventually restarts.
        let deadline = Instant::now() + Duration::from_secs(10);
        while !race.running() {
            race.update(&[], &mut ranking);
            assert!(Instant::now() < deadline, "race never restarted");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn menu_button_signals_back_to_menu() {
        let mut race = fast_race();
        let mut ranking = Ranking::new();
        race.force_running();
        race.obstacle_mut().force_state(Lane::Right, BASE_SCROLL_SPEED);
        tick_until_crash(&mut race, &mut ranking);

        let signal = race.update(
            &[InputEvent::TapDown(Vec2 { x: 45., y: -47.5 })],
            &mut ranking,
        );
        assert_eq!(signal, Some(RaceSignal::BackToMenu));
    }

    #[test]
    fn taps_are_ignored_while_driving() {
        let mut race = fast_race();
        let mut ranking = Ranking::new();
        race.force_running();
        race.obstacle_mut().force_state(Lane::Right, BASE_SCROLL_SPEED);

        let signal = race.update(
            &[InputEvent::TapDown(Vec2 { x: 45., y: -47.5 })],
            &mut ranking,
        );
        assert_eq!(signal, None);
        assert!(!race.hud().accident_happened());
    }

    #[test]
    fn countdown_starts_the_race() {
        let mut race = fast_race();
        let mut ranking = Ranking::new();

        let deadline = Instant::now() + Duration::from_secs(10);
        while !race.running() {
            race.update(&[], &mut ranking);
            assert!(Instant::now() < deadline, "countdown never finished");
            thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn difficulty_steps_up_on_schedule() {
        let mut race = fast_race();
        race.force_running();
        race.obstacle_mut().force_state(Lane::Left, BASE_SCROLL_SPEED);

        race.apply_difficulty(34_999);
        assert_eq!(race.world().scroll_speed(), BASE_SCROLL_SPEED);
        race.apply_difficulty(35_000);
        assert_eq!(race.world().scroll_speed(), 0.1);
        assert_eq!(race.obstacle().speed(), 0.1);
        race.apply_difficulty(96_000);
        assert_eq!(race.world().scroll_speed(), 0.25);
        race.apply_difficulty(275_000);
        assert_eq!(race.world().scroll_speed(), 0.9);
    }
}
