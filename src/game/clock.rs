use crate::core::prelude::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// The survival clock: a timer thread advances a shared millisecond counter
/// once per tick while the race runs. The counter is the only state shared
/// across threads; the update loop and the timer thread both go through the
/// mutex.
///
/// The counter always advances by [`TIMER_TICK_MS`] per tick regardless of
/// the wall-clock tick duration, so tests can run an accelerated clock with
/// identical arithmetic.
#[derive(Debug)]
pub struct SurvivalClock {
    millis: Arc<Mutex<u32>>,
    ticking: Arc<AtomicBool>,
    tick: Duration,
    worker: Option<JoinHandle<()>>,
}

impl SurvivalClock {
    pub fn new() -> Self {
        Self::with_tick(Duration::from_millis(u64::from(TIMER_TICK_MS)))
    }

    pub fn with_tick(tick: Duration) -> Self {
        Self {
            millis: Arc::new(Mutex::new(0)),
            ticking: Arc::new(AtomicBool::new(false)),
            tick,
            worker: None,
        }
    }

    /// Starts the timer thread. Calling on an already-running clock is a
    /// no-op.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            return;
        }
        self.ticking.store(true, Ordering::SeqCst);
        let millis = Arc::clone(&self.millis);
        let ticking = Arc::clone(&self.ticking);
        let tick = self.tick;
        self.worker = Some(thread::spawn(move || {
            while ticking.load(Ordering::SeqCst) {
                thread::sleep(tick);
                if !ticking.load(Ordering::SeqCst) {
                    break;
                }
                *millis.lock().unwrap() += TIMER_TICK_MS;
            }
        }));
    }

    /// Stops and joins the timer thread. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.ticking.store(false, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("survival clock worker panicked");
            }
        }
    }

    /// Zeroes the counter. The clock must be stopped first.
    pub fn reset(&mut self) {
        check!(self.worker.is_none());
        *self.millis.lock().unwrap() = 0;
    }

    /// Total milliseconds on the clock, countdown phase included.
    pub fn millis(&self) -> u32 {
        *self.millis.lock().unwrap()
    }

    /// True while the pre-race countdown is still running.
    pub fn in_countdown(&self) -> bool {
        self.millis() < START_DELAY_MS
    }

    /// Milliseconds survived since the race proper started.
    pub fn race_millis(&self) -> u32 {
        self.millis().saturating_sub(START_DELAY_MS)
    }
}

impl Default for SurvivalClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SurvivalClock {
    fn drop(&mut self) {
        self.stop();
    }
}
