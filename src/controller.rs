//! Session controller: the command interface the host drives.
//!
//! Commands whose preconditions do not hold are no-ops and return false.
//! Successful transitions are announced to subscribed observers.

use crate::clock::{Clock, SystemClock};
use crate::deck::DeckSource;
use crate::notes::NotesDocument;
use crate::report::Report;
use crate::session::{Phase, Session};

/// State change notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    DeckLoaded { pages: usize },
    NotesLoaded { segments: usize },
    Started { slides: usize },
    SlideChanged { from: usize, to: usize },
    Paused,
    Resumed,
    Ended,
    Restarted,
}

/// Receives controller events after each successful transition
pub trait SessionObserver {
    fn notify(&mut self, event: &SessionEvent);
}

/// Logs every transition through the `log` facade
#[derive(Debug, Default)]
pub struct LogObserver;

impl SessionObserver for LogObserver {
    fn notify(&mut self, event: &SessionEvent) {
        log::info!("session event: {event:?}");
    }
}

/// What the display surface needs on each tick
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFrame {
    pub slide_index: usize,
    pub total_slides: usize,
    pub notes: Option<String>,
    pub running_total: f64,
    pub running_slide_time: f64,
    pub progress: f64,
    pub paused: bool,
}

pub struct SessionController<C: Clock = SystemClock> {
    clock: C,
    phase: Phase,
    deck: Option<Box<dyn DeckSource>>,
    notes: Option<NotesDocument>,
    session: Option<Session>,
    report: Option<Report>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl SessionController<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::new())
    }
}

impl Default for SessionController<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SessionController<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            phase: Phase::Setup,
            deck: None,
            notes: None,
            session: None,
            report: None,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    fn emit(&mut self, event: SessionEvent) {
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn deck(&self) -> Option<&dyn DeckSource> {
        self.deck.as_deref()
    }

    pub fn notes(&self) -> Option<&NotesDocument> {
        self.notes.as_ref()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn is_presenting(&self) -> bool {
        self.phase == Phase::Presenting
    }

    /// Accepted only during setup.
    pub fn load_deck(&mut self, deck: Box<dyn DeckSource>) -> bool {
        if self.phase != Phase::Setup {
            return false;
        }
        let pages = deck.page_count();
        self.deck = Some(deck);
        self.emit(SessionEvent::DeckLoaded { pages });
        true
    }

    /// Accepted only during setup.
    pub fn load_notes(&mut self, notes: NotesDocument) -> bool {
        if self.phase != Phase::Setup {
            return false;
        }
        let segments = notes.len();
        self.notes = Some(notes);
        self.emit(SessionEvent::NotesLoaded { segments });
        true
    }

    /// Both inputs are loaded and the deck has at least one page.
    pub fn can_start(&self) -> bool {
        self.phase == Phase::Setup
            && self.notes.is_some()
            && self.deck.as_ref().is_some_and(|d| d.page_count() > 0)
    }

    pub fn start(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }
        let slides = self.deck.as_ref().map_or(0, |d| d.page_count());
        if let Some(notes) = self.notes.as_ref().filter(|n| n.len() != slides) {
            log::warn!(
                "notes have {} segment(s) for {} slide(s); missing notes show a placeholder",
                notes.len(),
                slides
            );
        }
        self.session = Some(Session::start(slides, self.clock.now()));
        self.report = None;
        self.phase = Phase::Presenting;
        self.emit(SessionEvent::Started { slides });
        true
    }

    pub fn pause(&mut self) -> bool {
        let now = self.clock.now();
        let paused = match (self.phase, self.session.as_mut()) {
            (Phase::Presenting, Some(session)) => session.pause(now),
            _ => false,
        };
        if paused {
            self.emit(SessionEvent::Paused);
        }
        paused
    }

    pub fn resume(&mut self) -> bool {
        let now = self.clock.now();
        let resumed = match (self.phase, self.session.as_mut()) {
            (Phase::Presenting, Some(session)) => session.resume(now),
            _ => false,
        };
        if resumed {
            self.emit(SessionEvent::Resumed);
        }
        resumed
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.session.as_ref().map(Session::is_paused) {
            Some(true) => self.resume(),
            Some(false) => self.pause(),
            None => false,
        }
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if self.phase != Phase::Presenting {
            return false;
        }
        let now = self.clock.now();
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let from = session.current_slide_index();
        if !session.go_to(index, now) {
            return false;
        }
        let to = session.current_slide_index();
        self.emit(SessionEvent::SlideChanged { from, to });
        true
    }

    pub fn next(&mut self) -> bool {
        match self.current_index() {
            Some(current) => self.go_to(current + 1),
            None => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.current_index().and_then(|c| c.checked_sub(1)) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last(&mut self) -> bool {
        match self.session.as_ref().map(Session::slide_count) {
            Some(count) if count > 0 => self.go_to(count - 1),
            _ => false,
        }
    }

    fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(Session::current_slide_index)
    }

    /// Fold running time and build the final report.
    pub fn end(&mut self) -> bool {
        if self.phase != Phase::Presenting {
            return false;
        }
        let now = self.clock.now();
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.stop(now);
        let report =
            Report::from_elapsed(&session.per_slide_elapsed(now), session.total_elapsed(now));
        log::info!(
            "session ended after {} over {} slide(s)",
            report.formatted_total(),
            report.rows.len()
        );
        self.report = Some(report);
        self.phase = Phase::Ended;
        self.emit(SessionEvent::Ended);
        true
    }

    /// Back to setup with timing and position cleared; deck and notes stay.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::Ended {
            return false;
        }
        self.session = None;
        self.report = None;
        self.phase = Phase::Setup;
        self.emit(SessionEvent::Restarted);
        true
    }

    /// Live view for the display tick. Read-only; None outside a presentation.
    pub fn snapshot(&self) -> Option<DisplayFrame> {
        if self.phase != Phase::Presenting {
            return None;
        }
        let session = self.session.as_ref()?;
        let now = self.clock.now();
        let slide_index = session.current_slide_index();

        Some(DisplayFrame {
            slide_index,
            total_slides: session.slide_count(),
            notes: self
                .notes
                .as_ref()
                .and_then(|n| n.segment_for(slide_index))
                .map(String::from),
            running_total: session.total_elapsed(now),
            running_slide_time: session.slide_elapsed(now),
            progress: session.progress(),
            paused: session.is_paused(),
        })
    }
}

impl<C: Clock> std::fmt::Debug for SessionController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("phase", &self.phase)
            .field("deck", &self.deck.as_ref().map(|d| d.label().to_string()))
            .field("notes", &self.notes.as_ref().map(NotesDocument::len))
            .field("session", &self.session)
            .field("observers", &self.observers.len())
            .finish()
    }
}
