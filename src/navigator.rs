use std::time::Duration;

use crate::timer::TimeAccumulator;

/// Current slide position plus one accumulator per slide.
///
/// Per-slide time survives revisits: coming back to a slide resumes its
/// accumulator instead of starting a new one.
#[derive(Debug, Clone)]
pub struct SlideNavigator {
    current: usize,
    timers: Vec<TimeAccumulator>,
}

impl SlideNavigator {
    pub fn new(slide_count: usize) -> Self {
        Self {
            current: 0,
            timers: vec![TimeAccumulator::new(); slide_count],
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.timers.len()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.timers.len()
    }

    /// Move to `index`. Out-of-range targets leave everything untouched and
    /// return false. With `running`, the slide being left folds its time and
    /// the target slide starts timing at `now`.
    pub fn go_to(&mut self, index: usize, now: Duration, running: bool) -> bool {
        if index >= self.timers.len() {
            return false;
        }
        self.timers[self.current].pause(now);
        self.current = index;
        if running {
            self.timers[self.current].start(now);
        }
        true
    }

    pub fn next(&mut self, now: Duration, running: bool) -> bool {
        self.go_to(self.current + 1, now, running)
    }

    pub fn previous(&mut self, now: Duration, running: bool) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to(index, now, running),
            None => false,
        }
    }

    pub fn start_current(&mut self, now: Duration) {
        if let Some(timer) = self.timers.get_mut(self.current) {
            timer.start(now);
        }
    }

    pub fn pause_current(&mut self, now: Duration) -> f64 {
        self.timers
            .get_mut(self.current)
            .map(|timer| timer.pause(now))
            .unwrap_or(0.0)
    }

    /// Live time on the current slide.
    pub fn current_elapsed(&self, now: Duration) -> f64 {
        self.timers
            .get(self.current)
            .map(|timer| timer.current_value(now))
            .unwrap_or(0.0)
    }

    /// Per-slide seconds, in slide order.
    pub fn elapsed(&self, now: Duration) -> Vec<f64> {
        self.timers.iter().map(|t| t.current_value(now)).collect()
    }
}
