use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

/// Runs `f`, returning its output and the wall time it took in seconds.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let stopwatch = Stopwatch::start();
    let output = f();
    (output, stopwatch.elapsed_secs())
}
