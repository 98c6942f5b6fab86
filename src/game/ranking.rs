use crate::core::prelude::*;
use serde::{Deserialize, Serialize};

/// The top-five survival times, best first. One push is accepted per race;
/// restarting re-arms the latch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ranking {
    times: [u32; RANKING_SIZE],
    pushed: bool,
}

impl Ranking {
    pub fn new() -> Self {
        Self {
            times: [0; RANKING_SIZE],
            pushed: false,
        }
    }

    /// Sorts a survival time into the board if it beats any entry, shifting
    /// the rest down. Ignored if this race's result was already pushed.
    pub fn push(&mut self, time_ms: u32) {
        if self.pushed {
            return;
        }
        if let Some(slot) = self.times.iter().position(|&t| time_ms > t) {
            for i in (slot + 1..RANKING_SIZE).rev() {
                self.times[i] = self.times[i - 1];
            }
            self.times[slot] = time_ms;
            self.pushed = true;
            info!("new ranking entry: {} ms at place {}", time_ms, slot + 1);
        }
    }

    /// Accept a push for the next race.
    pub fn re_arm(&mut self) {
        self.pushed = false;
    }

    pub fn best_time(&self) -> u32 {
        self.times[0]
    }

    pub fn entries(&self) -> &[u32] {
        &self.times
    }
}

impl Default for Ranking {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats milliseconds as `MM:SS`, zero-padded.
pub fn format_time(millis: u32) -> Result<String> {
    if millis > MAX_DISPLAY_TIME_MS {
        bail!("time value {millis} ms exceeds the displayable range");
    }
    let total_secs = millis / 1000;
    Ok(format!("{:02}:{:02}", total_secs / 60, total_secs % 60))
}
