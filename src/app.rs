use std::cell::Cell;
use std::rc::Rc;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clock::{Clock, SystemClock};
use crate::controller::{LogObserver, SessionController, SessionEvent, SessionObserver};
use crate::report::ReportStore;
use crate::session::Phase;

/// What the event loop should do after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Redraw,
    Quit,
}

/// Marks the screen dirty whenever the controller changes state
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Rc<Cell<bool>>);

impl RedrawFlag {
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

impl SessionObserver for RedrawFlag {
    fn notify(&mut self, _event: &SessionEvent) {
        self.0.set(true);
    }
}

#[derive(Debug)]
pub struct App<C: Clock = SystemClock> {
    pub controller: SessionController<C>,
    pub show_notes: bool,
    /// key reference overlay, opened from the setup screen
    pub show_help: bool,
    pub auto_export: bool,
    pub report_store: Option<ReportStore>,
    /// one-line feedback shown on the results screen
    pub status: Option<String>,
    dirty: RedrawFlag,
}

impl<C: Clock> App<C> {
    pub fn new(mut controller: SessionController<C>) -> Self {
        let dirty = RedrawFlag::default();
        controller.subscribe(Box::new(dirty.clone()));
        controller.subscribe(Box::new(LogObserver));
        Self {
            controller,
            show_notes: true,
            show_help: false,
            auto_export: false,
            report_store: None,
            status: None,
            dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn on_key(&mut self, key: KeyEvent) -> AppAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        if self.show_help {
            // the overlay swallows input until it is dismissed
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
                return AppAction::Redraw;
            }
            return AppAction::Continue;
        }

        match self.phase() {
            Phase::Setup => match key.code {
                KeyCode::Char('?') => {
                    self.show_help = true;
                    return AppAction::Redraw;
                }
                KeyCode::Enter | KeyCode::Char('s') => {
                    // inert until both inputs are loaded
                    self.controller.start();
                }
                KeyCode::Esc | KeyCode::Char('q') => return AppAction::Quit,
                _ => {}
            },
            Phase::Presenting => match key.code {
                KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown | KeyCode::Enter => {
                    self.controller.next();
                }
                KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp | KeyCode::Backspace => {
                    self.controller.previous();
                }
                KeyCode::Home => {
                    self.controller.first();
                }
                KeyCode::End => {
                    self.controller.last();
                }
                KeyCode::Char(' ') | KeyCode::Char('p') => {
                    self.controller.toggle_pause();
                }
                KeyCode::Tab => {
                    self.show_notes = !self.show_notes;
                    return AppAction::Redraw;
                }
                KeyCode::Esc => {
                    if self.controller.end() && self.auto_export {
                        self.export_report();
                    }
                }
                _ => {}
            },
            Phase::Ended => match key.code {
                KeyCode::Char('r') => {
                    self.status = None;
                    self.controller.restart();
                }
                KeyCode::Char('e') => {
                    self.export_report();
                    return AppAction::Redraw;
                }
                KeyCode::Esc | KeyCode::Char('q') => return AppAction::Quit,
                _ => {}
            },
        }

        if self.dirty.take() {
            AppAction::Redraw
        } else {
            AppAction::Continue
        }
    }

    /// Live timers only change while presenting.
    pub fn on_tick(&mut self) -> AppAction {
        let changed = self.dirty.take();
        match self.controller.snapshot() {
            Some(frame) if !frame.paused => AppAction::Redraw,
            _ if changed => AppAction::Redraw,
            _ => AppAction::Continue,
        }
    }

    /// Append the finished report to the CSV history.
    pub fn export_report(&mut self) {
        let (Some(store), Some(report)) = (&self.report_store, self.controller.report()) else {
            self.status = Some("Nothing to export".to_string());
            return;
        };
        let deck = self.controller.deck().map_or("", |d| d.label());
        self.status = Some(match store.append(report, deck, Local::now()) {
            Ok(()) => format!("Report saved to {}", store.path().display()),
            Err(e) => {
                log::error!("report export failed: {e}");
                format!("Export failed: {e}")
            }
        });
    }
}
