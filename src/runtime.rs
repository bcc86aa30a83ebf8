use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// What the presenter loop reacts to
#[derive(Clone, Debug)]
pub enum PresenterEvent {
    Key(KeyEvent),
    Resize,
    /// The display refresh is due
    Tick,
    /// Input is gone for good; the loop must stop
    Closed,
}

/// Source of terminal input for the presenter
pub trait PresenterEventSource: Send + 'static {
    /// Wait up to `timeout` for input. `Disconnected` means no input will ever arrive again.
    fn recv_timeout(&self, timeout: Duration) -> Result<PresenterEvent, RecvTimeoutError>;
}

/// Map a raw terminal event onto the presenter's input, dropping what it ignores
pub fn translate(event: CtEvent) -> Option<PresenterEvent> {
    match event {
        // release events would double every slide change on terminals that report them
        CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(PresenterEvent::Key(key)),
        CtEvent::Resize(_, _) => Some(PresenterEvent::Resize),
        _ => None,
    }
}

/// Reads the terminal on a background thread
pub struct CrosstermEventSource {
    rx: Receiver<PresenterEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        // the sender drops with the thread, which the runner reports as Closed
        std::thread::spawn(move || loop {
            match event::read() {
                Ok(raw) => {
                    let Some(evt) = translate(raw) else {
                        continue;
                    };
                    if tx.send(evt).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::error!("terminal input lost: {e}");
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenterEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<PresenterEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Display refresh cadence
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Scripted input for headless runs
pub struct TestEventSource {
    rx: Receiver<PresenterEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<PresenterEvent>) -> Self {
        Self { rx }
    }
}

impl PresenterEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<PresenterEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Drives the presenter loop: pending input first, then a tick on a fixed schedule.
///
/// Ticks follow their own deadline, so a burst of key presses never pushes the
/// next timer refresh back. A loop that stalls past several deadlines gets one
/// tick, not a burst of catch-up ticks.
pub struct Runner<E: PresenterEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
    next_tick: Instant,
}

impl<E: PresenterEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        let next_tick = Instant::now() + ticker.interval();
        Self {
            event_source,
            ticker,
            next_tick,
        }
    }

    pub fn step(&mut self) -> PresenterEvent {
        let remaining = self.next_tick.saturating_duration_since(Instant::now());
        match self.event_source.recv_timeout(remaining) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => {
                self.schedule_next_tick();
                PresenterEvent::Tick
            }
            Err(RecvTimeoutError::Disconnected) => PresenterEvent::Closed,
        }
    }

    fn schedule_next_tick(&mut self) {
        let now = Instant::now();
        self.next_tick += self.ticker.interval();
        if self.next_tick <= now {
            self.next_tick = now + self.ticker.interval();
        }
    }
}
