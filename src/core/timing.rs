use std::time::{Duration, Instant};

/// A resettable stopwatch that accumulates elapsed time across several
/// start/stop spans within a step
#[derive(Debug, Default)]
pub struct Stopwatch {
    elapsed: Duration,
    started: Option<Instant>,
}

impl Stopwatch {
    /// Creates a stopped stopwatch with zero accumulated time
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or resumes) the stopwatch
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Stops the stopwatch, folding the running span into the total
    pub fn stop(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed += started.elapsed();
        }
    }

    /// Stops the stopwatch and clears the accumulated time
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.started = None;
    }

    /// Clears the accumulated time and starts measuring again
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Returns the accumulated time, including a running span
    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(started) => self.elapsed + started.elapsed(),
            None => self.elapsed,
        }
    }
}

/// Per-phase timing samples of the most recent step, for diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct StepTimings {
    /// Wall time of the whole step
    pub total: Duration,

    /// Time spent sweeping balls against mesh colliders
    pub mesh_collision: Duration,

    /// Time spent sweeping balls against other balls
    pub sphere_collision: Duration,
}
