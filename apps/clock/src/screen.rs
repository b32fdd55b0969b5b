// ABOUTME: Lifecycle of the clock screen and its repeating refresh timer.
// ABOUTME: Starts ticking on create and stops the timer on teardown or drop.

use std::rc::Rc;
use std::time::Duration;

use slint::TimerMode;
use tracing::info;

use crate::clock::TimeSource;
use crate::updater::{ClockDisplay, DisplayUpdater};

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// A timer on the UI event loop that fires a callback at a fixed interval.
pub trait RepeatingTimer {
    fn start_repeating(&self, interval: Duration, callback: Box<dyn FnMut()>);
    fn cancel(&self);
    fn is_active(&self) -> bool;
}

impl RepeatingTimer for slint::Timer {
    fn start_repeating(&self, interval: Duration, mut callback: Box<dyn FnMut()>) {
        self.start(TimerMode::Repeated, interval, move || callback());
    }

    fn cancel(&self) {
        self.stop();
    }

    fn is_active(&self) -> bool {
        self.running()
    }
}

pub struct ClockScreen<S, D, T: RepeatingTimer> {
    updater: Rc<DisplayUpdater<S, D>>,
    timer: T,
}

impl<S, D, T> ClockScreen<S, D, T>
where
    S: TimeSource + 'static,
    D: ClockDisplay + 'static,
    T: RepeatingTimer,
{
    /// Shows the first frame right away, then refreshes every `interval`.
    pub fn create(updater: DisplayUpdater<S, D>, timer: T, interval: Duration) -> Self {
        let updater = Rc::new(updater);
        updater.tick();

        let ticking = Rc::clone(&updater);
        timer.start_repeating(
            interval,
            Box::new(move || {
                ticking.tick();
            }),
        );

        info!(?interval, "clock screen created");
        Self { updater, timer }
    }
}

impl<S, D, T: RepeatingTimer> ClockScreen<S, D, T> {
    pub fn teardown(&self) {
        if self.timer.is_active() {
            self.timer.cancel();
        }
        if !self.updater.is_cancelled() {
            self.updater.cancel();
            info!("clock screen torn down");
        }
    }
}

impl<S, D, T: RepeatingTimer> Drop for ClockScreen<S, D, T> {
    fn drop(&mut self) {
        self.teardown();
    }
}
