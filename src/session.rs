use std::time::Duration;

use crate::navigator::SlideNavigator;
use crate::timer::TimeAccumulator;

/// Phase of the presenter lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Phase {
    Setup,
    Presenting,
    Ended,
}

/// One run of a presentation, from start to end/restart.
///
/// Total and per-slide accounting always read the same clock value, so the
/// per-slide sum tracks the total.
#[derive(Debug, Clone)]
pub struct Session {
    navigator: SlideNavigator,
    total: TimeAccumulator,
    paused: bool,
}

impl Session {
    /// New running session positioned on the first slide.
    pub fn start(slide_count: usize, now: Duration) -> Self {
        let mut session = Self {
            navigator: SlideNavigator::new(slide_count),
            total: TimeAccumulator::new(),
            paused: false,
        };
        session.total.start(now);
        session.navigator.start_current(now);
        session
    }

    pub fn slide_count(&self) -> usize {
        self.navigator.slide_count()
    }

    pub fn current_slide_index(&self) -> usize {
        self.navigator.current()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_first(&self) -> bool {
        self.navigator.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.navigator.is_last()
    }

    pub fn pause(&mut self, now: Duration) -> bool {
        if self.paused {
            return false;
        }
        self.total.pause(now);
        self.navigator.pause_current(now);
        self.paused = true;
        true
    }

    pub fn resume(&mut self, now: Duration) -> bool {
        if !self.paused {
            return false;
        }
        self.total.resume(now);
        self.navigator.start_current(now);
        self.paused = false;
        true
    }

    pub fn go_to(&mut self, index: usize, now: Duration) -> bool {
        let running = !self.paused;
        self.navigator.go_to(index, now, running)
    }

    /// Stop all running accounting; used when the session ends.
    pub fn stop(&mut self, now: Duration) {
        self.total.pause(now);
        self.navigator.pause_current(now);
    }

    pub fn total_elapsed(&self, now: Duration) -> f64 {
        self.total.current_value(now)
    }

    pub fn slide_elapsed(&self, now: Duration) -> f64 {
        self.navigator.current_elapsed(now)
    }

    pub fn per_slide_elapsed(&self, now: Duration) -> Vec<f64> {
        self.navigator.elapsed(now)
    }

    /// Fraction of the deck reached, counting the current slide.
    pub fn progress(&self) -> f64 {
        match self.slide_count() {
            0 => 0.0,
            n => (self.current_slide_index() + 1) as f64 / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn phase_display() {
        assert_eq!(Phase::Setup.to_string(), "Setup");
        assert_eq!(Phase::Presenting.to_string(), "Presenting");
        assert_eq!(Phase::Ended.to_string(), "Ended");
    }

    #[test]
    fn new_session_runs_on_first_slide() {
        let session = Session::start(3, secs(1.0));
        assert_eq!(session.current_slide_index(), 0);
        assert!(!session.is_paused());
        assert!((session.total_elapsed(secs(3.0)) - 2.0).abs() < 1e-6);
        assert!((session.slide_elapsed(secs(3.0)) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn pause_freezes_total_and_slide() {
        let mut session = Session::start(2, secs(0.0));
        assert!(session.pause(secs(2.0)));
        assert!(!session.pause(secs(3.0)));
        assert!((session.total_elapsed(secs(100.0)) - 2.0).abs() < 1e-6);
        assert!((session.slide_elapsed(secs(100.0)) - 2.0).abs() < 1e-6);

        assert!(session.resume(secs(100.0)));
        assert!(!session.resume(secs(101.0)));
        assert!((session.total_elapsed(secs(101.0)) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn per_slide_sum_matches_total() {
        let mut session = Session::start(3, secs(0.0));
        session.go_to(1, secs(1.5));
        session.pause(secs(2.0));
        session.go_to(2, secs(9.0));
        session.resume(secs(10.0));
        session.go_to(0, secs(11.25));
        session.stop(secs(12.0));

        let per_slide: f64 = session.per_slide_elapsed(secs(50.0)).iter().sum();
        let total = session.total_elapsed(secs(50.0));
        assert!((per_slide - total).abs() < 1e-6);
        assert!((total - 4.0).abs() < 1e-6);
    }

    #[test]
    fn progress_counts_current_slide() {
        let mut session = Session::start(4, secs(0.0));
        assert!((session.progress() - 0.25).abs() < 1e-9);
        session.go_to(3, secs(1.0));
        assert!((session.progress() - 1.0).abs() < 1e-9);
    }
}
