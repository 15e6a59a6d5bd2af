//! Timer loop that drives the dashboard.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use super::{DashboardEvent, DashboardHandle};

/// Source of wall-clock time for the schedule.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Periods of the two timers.
#[derive(Debug, Clone, Copy)]
pub struct Timers {
    /// Countdown tick for the slideshow and refresh timer.
    pub tick: Duration,
    /// How often the wall clock is re-sampled.
    pub clock: Duration,
}

impl Default for Timers {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            clock: Duration::from_secs(60),
        }
    }
}

/// Run the dashboard forever: load once, then tick.
pub async fn run(handle: DashboardHandle, clock: Arc<dyn Clock>, timers: Timers) {
    info!(
        tick_ms = timers.tick.as_millis() as u64,
        clock_secs = timers.clock.as_secs(),
        "Dashboard driver started"
    );

    handle.dispatch(DashboardEvent::RefreshRequested).await;

    let mut tick = interval(timers.tick);
    tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut clock_tick = interval(timers.clock);
    clock_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Both intervals complete their first tick immediately.
    tick.tick().await;

    loop {
        tokio::select! {
            _ = tick.tick() => {
                handle.dispatch(DashboardEvent::Tick).await;
            }
            _ = clock_tick.tick() => {
                handle.dispatch(DashboardEvent::ClockTick(clock.now())).await;
            }
        }
    }
}
