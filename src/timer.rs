use std::time::Duration;

/// Measures running vs. paused time.
///
/// Every transition takes the current clock reading, so the accumulator itself
/// never touches wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeAccumulator {
    running_since: Option<Duration>,
    accumulated: f64,
}

impl TimeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin accumulating from `now`. Returns false if already running.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.running_since.is_some() {
            return false;
        }
        self.running_since = Some(now);
        true
    }

    /// Fold the running span into the total and stop. Returns the folded delta,
    /// or 0.0 when already paused.
    pub fn pause(&mut self, now: Duration) -> f64 {
        match self.running_since.take() {
            Some(since) => {
                let delta = span_secs(since, now);
                self.accumulated += delta;
                delta
            }
            None => 0.0,
        }
    }

    /// Restart accumulation after a pause. Returns false if not paused.
    pub fn resume(&mut self, now: Duration) -> bool {
        self.start(now)
    }

    /// Accumulated seconds plus the live span, if running.
    pub fn current_value(&self, now: Duration) -> f64 {
        match self.running_since {
            Some(since) => self.accumulated + span_secs(since, now),
            None => self.accumulated,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Seconds committed by earlier pauses, excluding any live span.
    pub fn committed(&self) -> f64 {
        self.accumulated
    }
}

fn span_secs(since: Duration, now: Duration) -> f64 {
    now.saturating_sub(since).as_secs_f64()
}
