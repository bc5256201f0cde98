//! Timing of synchronous work.

use std::time::{Duration, Instant};
use tracing::debug;

/// One timed run.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSample {
    pub label: String,
    pub duration: Duration,
}

impl PerformanceSample {
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

/// Run `f` and time it. Logs the sample at debug level when `log` is set.
pub fn measure_sync<T>(label: &str, log: bool, f: impl FnOnce() -> T) -> (T, PerformanceSample) {
    let start = Instant::now();
    let result = f();
    let sample = PerformanceSample {
        label: label.to_string(),
        duration: start.elapsed(),
    };

    if log {
        debug!("[perf] {}: {:.2}ms", sample.label, sample.duration_ms());
    }

    (result, sample)
}
