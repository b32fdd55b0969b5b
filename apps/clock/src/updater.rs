// ABOUTME: Per-tick display update for the clock screen.
// ABOUTME: Turns the current instant into time, greeting, and message text.

use std::cell::Cell;

use chrono_tz::Tz;
use tracing::debug;

use crate::clock::{self, TimeSource};
use crate::greeting::DayPeriod;

/// The three strings shown on screen, always written together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub time: String,
    pub greeting: String,
    pub message: String,
}

pub trait ClockDisplay {
    fn show(&self, frame: &Frame);
}

pub struct DisplayUpdater<S, D> {
    source: S,
    display: D,
    zone: Tz,
    cancelled: Cell<bool>,
}

impl<S: TimeSource, D: ClockDisplay> DisplayUpdater<S, D> {
    pub fn new(source: S, display: D, zone: Tz) -> Self {
        Self {
            source,
            display,
            zone,
            cancelled: Cell::new(false),
        }
    }

    pub fn render(&self) -> Frame {
        let now = self.source.now();
        let period = DayPeriod::from_hour(clock::hour_of_day(now, &self.zone));
        Frame {
            time: clock::format_time(now, &self.zone),
            greeting: period.greeting().to_string(),
            message: period.message().to_string(),
        }
    }

    /// Renders and shows one frame. Returns `None` once cancelled.
    pub fn tick(&self) -> Option<Frame> {
        if self.cancelled.get() {
            return None;
        }

        let frame = self.render();
        debug!(
            zone = self.zone.name(),
            time = %frame.time,
            greeting = %frame.greeting,
            message = %frame.message,
            "tick"
        );
        self.display.show(&frame);
        Some(frame)
    }
}

impl<S, D> DisplayUpdater<S, D> {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
