use std::fmt;

use uom::si::{f64::Time, time::second};

/// Where a [`Stopwatch`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Zero elapsed, not counting.
    #[default]
    Idle,
    /// Counting one second per tick.
    Running,
    /// Stopped with elapsed time retained.
    Paused,
}

/// A snapshot of a stopwatch, suitable for binding to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StopwatchState {
    pub elapsed_seconds: u64,
    pub running: bool,
}

/// A start/pause/reset brew timer.
///
/// The stopwatch does not own a clock. Whatever drives it (a UI interval, a
/// test loop) calls [`Stopwatch::tick`] once per elapsed second, and the
/// stopwatch decides whether that tick counts.
///
/// # Transitions
///
/// - [`start`](Self::start): Idle or Paused to Running. No-op when Running.
/// - [`pause`](Self::pause): Running to Paused. No-op otherwise.
/// - [`reset`](Self::reset): any phase to Idle, elapsed back to zero.
/// - [`tick`](Self::tick): adds one second while Running, ignored otherwise.
///
/// # Example
///
/// ```
/// use cupping_brew::{Phase, Stopwatch};
///
/// let mut timer = Stopwatch::new();
/// timer.start();
/// for _ in 0..125 {
///     timer.tick();
/// }
/// assert_eq!(timer.to_string(), "02:05");
///
/// timer.pause();
/// timer.tick();
/// assert_eq!(timer.elapsed_seconds(), 125);
///
/// timer.reset();
/// assert_eq!(timer.phase(), Phase::Idle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stopwatch {
    elapsed_seconds: u64,
    phase: Phase,
}

impl Stopwatch {
    /// Creates an idle stopwatch at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        match self.phase {
            Phase::Idle | Phase::Paused => {
                tracing::debug!(elapsed = self.elapsed_seconds, "stopwatch started");
                self.phase = Phase::Running;
            }
            Phase::Running => {}
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            tracing::debug!(elapsed = self.elapsed_seconds, "stopwatch paused");
            self.phase = Phase::Paused;
        }
    }

    pub fn reset(&mut self) {
        tracing::debug!(elapsed = self.elapsed_seconds, "stopwatch reset");
        self.elapsed_seconds = 0;
        self.phase = Phase::Idle;
    }

    /// Advances the count by one second if running.
    pub fn tick(&mut self) {
        if self.phase == Phase::Running {
            self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        } else {
            tracing::trace!(phase = ?self.phase, "tick ignored");
        }
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> StopwatchState {
        StopwatchState {
            elapsed_seconds: self.elapsed_seconds,
            running: self.running(),
        }
    }

    /// Returns the elapsed time as a unit-safe quantity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed(&self) -> Time {
        Time::new::<second>(self.elapsed_seconds as f64)
    }

    /// Returns the elapsed time formatted as `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format(self.elapsed_seconds)
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Formats seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours.
///
/// # Example
///
/// ```
/// assert_eq!(cupping_brew::format(125), "02:05");
/// assert_eq!(cupping_brew::format(59), "00:59");
/// assert_eq!(cupping_brew::format(6000), "100:00");
/// ```
#[must_use]
pub fn format(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
