// Stopwatch wrapper for solution functions.

use std::time::{Duration, Instant};

/// Result of a timed computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed wall-clock time in fractional seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run `f` to completion and measure how long it took.
pub fn time<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let timed = time_fn(f);
    let seconds = timed.seconds();
    (timed.value, seconds)
}

/// Like [`time`], keeping the full-resolution [`Duration`].
pub fn time_fn<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}
