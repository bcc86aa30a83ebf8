use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use podium::app::{App, AppAction};
use podium::clock::ManualClock;
use podium::controller::SessionController;
use podium::deck::CountedDeck;
use podium::notes::NotesDocument;
use podium::runtime::{FixedTicker, PresenterEvent, Runner, TestEventSource};
use podium::Phase;

fn key(code: KeyCode) -> PresenterEvent {
    PresenterEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ready_app(slides: usize) -> (App<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut ctl = SessionController::with_clock(clock.clone());
    ctl.load_deck(Box::new(CountedDeck::new(slides)));
    ctl.load_notes(NotesDocument::build("# 1\nopen\n# 2\nmiddle\n# 3\nclose"));
    (App::new(ctl), clock)
}

// Headless run using the internal runtime without a TTY: every tick moves the
// clock one second, and keys are scripted against the tick count.
#[test]
fn headless_presentation_flow_completes() {
    let (mut app, clock) = ready_app(3);

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );

    tx.send(key(KeyCode::Enter)).unwrap();

    let mut ticks = 0u32;
    for _ in 0..500u32 {
        match runner.step() {
            PresenterEvent::Tick => {
                clock.advance_secs(1.0);
                ticks += 1;
                app.on_tick();
                match ticks {
                    2 | 5 => tx.send(key(KeyCode::Right)).unwrap(),
                    6 => tx.send(key(KeyCode::Esc)).unwrap(),
                    _ => {}
                }
            }
            PresenterEvent::Resize => {}
            PresenterEvent::Closed => break,
            PresenterEvent::Key(k) => {
                if app.on_key(k) == AppAction::Quit {
                    break;
                }
            }
        }
        if app.phase() == Phase::Ended {
            break;
        }
    }

    assert_eq!(app.phase(), Phase::Ended, "session should have ended");
    let report = app.controller.report().expect("report after end");
    let seconds: Vec<f64> = report.rows.iter().map(|r| r.seconds).collect();
    assert_eq!(seconds.len(), 3);
    assert!((seconds[0] - 2.0).abs() < 1e-6);
    assert!((seconds[1] - 3.0).abs() < 1e-6);
    assert!((seconds[2] - 1.0).abs() < 1e-6);
    assert!((report.total_seconds - 6.0).abs() < 1e-6);
    assert_eq!(report.formatted_total(), "00:00:06");
}

// Input that disappears mid-talk must end the loop instead of ticking forever.
#[test]
fn headless_loop_stops_when_input_closes() {
    let (mut app, clock) = ready_app(3);

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );
    tx.send(key(KeyCode::Enter)).unwrap();
    tx.send(key(KeyCode::Right)).unwrap();
    drop(tx);

    let mut steps = 0u32;
    let closed = loop {
        steps += 1;
        assert!(steps < 100, "loop kept running after input closed");
        let action = match runner.step() {
            PresenterEvent::Tick => {
                clock.advance_secs(1.0);
                app.on_tick()
            }
            PresenterEvent::Resize => AppAction::Redraw,
            PresenterEvent::Key(k) => app.on_key(k),
            PresenterEvent::Closed => break true,
        };
        if action == AppAction::Quit {
            break false;
        }
    };

    assert!(closed);
    assert_eq!(steps, 3);
    assert_eq!(app.phase(), Phase::Presenting);
    assert_eq!(app.controller.snapshot().map(|f| f.slide_index), Some(1));
}

#[test]
fn headless_pause_and_revisit_flow() {
    let (mut app, clock) = ready_app(2);

    app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    clock.advance_secs(5.0);
    app.on_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
    clock.advance_secs(1.0);
    app.on_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
    clock.advance_secs(120.0);
    app.on_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
    app.on_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
    clock.advance_secs(3.0);
    app.on_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));

    let report = app.controller.report().unwrap();
    assert!((report.rows[0].seconds - 8.0).abs() < 1e-6);
    assert!((report.rows[1].seconds - 1.0).abs() < 1e-6);
    assert!((report.total_seconds - 9.0).abs() < 1e-6);
}

#[test]
fn headless_restart_keeps_inputs() {
    let (mut app, clock) = ready_app(3);
    app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    app.on_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
    clock.advance_secs(10.0);
    app.on_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    app.on_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
    assert_eq!(app.phase(), Phase::Setup);

    app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let frame = app.controller.snapshot().unwrap();
    assert_eq!(frame.slide_index, 0);
    assert_eq!(frame.running_total, 0.0);
    assert_eq!(frame.notes.as_deref(), Some("open"));
}
