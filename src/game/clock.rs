//! Day clock
//!
//! The main clock fills from 0 towards 1 at `rate` per second and starts a
//! new day each time it fills. Mirror clocks only copy the main clock's fill
//! for display.

use log::info;

/// Default fill rate (fraction of a day per second)
pub const DEFAULT_CLOCK_RATE: f32 = 0.1;

/// Whether a clock drives the day cycle or only displays it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockRole {
    Main,
    Mirror,
}

/// Emitted once each time the main clock wraps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewDay {
    /// Days completed so far, counting this one
    pub day: u32,
}

#[derive(Debug, Clone)]
pub struct DayClock {
    role: ClockRole,
    rate: f32,
    fill: f32,
    started: bool,
    day: u32,
}

impl DayClock {
    /// The authoritative clock
    pub fn main(rate: f32) -> Self {
        Self::with_role(ClockRole::Main, rate)
    }

    /// A display-only clock
    pub fn mirror() -> Self {
        Self::with_role(ClockRole::Mirror, 0.0)
    }

    fn with_role(role: ClockRole, rate: f32) -> Self {
        Self {
            role,
            rate,
            fill: 0.0,
            started: false,
            day: 0,
        }
    }

    pub fn role(&self) -> ClockRole {
        self.role
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Current fill in [0, 1)
    pub fn fill(&self) -> f32 {
        self.fill
    }

    /// Days completed since the clock started
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Let `advance` take effect; stays on for the session
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Advance by `elapsed_secs`
    ///
    /// Any overshoot past a full day collapses into a single wrap, so at
    /// most one `NewDay` is returned per call. Mirrors and unstarted clocks
    /// never move.
    pub fn advance(&mut self, elapsed_secs: f32) -> Option<NewDay> {
        if self.role != ClockRole::Main || !self.started {
            return None;
        }

        self.fill += self.rate * elapsed_secs;
        if self.fill >= 1.0 {
            self.fill = 0.0;
            self.day += 1;
            info!("Day {} has passed", self.day);
            return Some(NewDay { day: self.day });
        }
        None
    }

    /// Copy the main clock's fill for display
    pub fn mirror_from(&mut self, main: &DayClock) {
        if self.role == ClockRole::Mirror {
            self.fill = main.fill;
            self.day = main.day;
        }
    }
}
