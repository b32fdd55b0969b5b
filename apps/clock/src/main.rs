// ABOUTME: Clock application for MobileOS.
// ABOUTME: Shows the time in a fixed zone with a greeting that follows the hour of day.

mod clock;
mod greeting;
mod screen;
mod updater;

use tracing::info;

use crate::clock::{DISPLAY_TIME_ZONE, SystemClock};
use crate::screen::{ClockScreen, TICK_INTERVAL};
use crate::updater::{ClockDisplay, DisplayUpdater, Frame};

slint::include_modules!();

struct WindowDisplay(slint::Weak<ClockWindow>);

impl ClockDisplay for WindowDisplay {
    fn show(&self, frame: &Frame) {
        if let Some(w) = self.0.upgrade() {
            w.set_time(frame.time.as_str().into());
            w.set_greeting(frame.greeting.as_str().into());
            w.set_message(frame.message.as_str().into());
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!(zone = DISPLAY_TIME_ZONE.name(), "starting clock");

    let window = ClockWindow::new()?;
    let updater = DisplayUpdater::new(
        SystemClock,
        WindowDisplay(window.as_weak()),
        DISPLAY_TIME_ZONE,
    );
    let screen = ClockScreen::create(updater, slint::Timer::default(), TICK_INTERVAL);

    info!("clock running");
    window.run()?;

    screen.teardown();
    info!("clock stopped");

    Ok(())
}
