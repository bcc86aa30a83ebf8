// Timing and navigation properties of the session controller, driven with a
// hand-advanced clock so no test waits on wall-clock time.

use podium::clock::{Clock, ManualClock};
use podium::controller::SessionController;
use podium::deck::CountedDeck;
use podium::notes::NotesDocument;

const TOLERANCE: f64 = 1e-6;

fn presenting(slides: usize) -> (SessionController<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut ctl = SessionController::with_clock(clock.clone());
    ctl.load_deck(Box::new(CountedDeck::new(slides)));
    ctl.load_notes(NotesDocument::build("notes"));
    assert!(ctl.start());
    (ctl, clock)
}

/// Small deterministic generator so the sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn index_stays_in_bounds_for_arbitrary_navigation() {
    for seed in 0..20u64 {
        let slides = (seed % 5 + 1) as usize;
        let (mut ctl, clock) = presenting(slides);
        let mut rng = Lcg(seed);

        for _ in 0..200 {
            clock.advance_secs((rng.next() % 7) as f64 * 0.25);
            let before = ctl.session().unwrap().current_slide_index();
            match rng.next() % 4 {
                0 => {
                    ctl.next();
                }
                1 => {
                    ctl.previous();
                }
                2 => {
                    let target = (rng.next() % (slides as u64 + 3)) as usize;
                    let moved = ctl.go_to(target);
                    if target >= slides {
                        assert!(!moved);
                        assert_eq!(ctl.session().unwrap().current_slide_index(), before);
                    }
                }
                _ => {
                    ctl.toggle_pause();
                }
            }
            let index = ctl.session().unwrap().current_slide_index();
            assert!(index < slides, "index {index} out of range for {slides}");
        }
    }
}

#[test]
fn per_slide_sum_matches_total_for_any_pattern() {
    for seed in 0..20u64 {
        let (mut ctl, clock) = presenting(4);
        let mut rng = Lcg(seed.wrapping_add(99));

        for _ in 0..100 {
            clock.advance_secs((rng.next() % 13) as f64 * 0.1);
            match rng.next() % 5 {
                0 => {
                    ctl.next();
                }
                1 => {
                    ctl.previous();
                }
                2 => {
                    ctl.go_to((rng.next() % 4) as usize);
                }
                3 => {
                    ctl.pause();
                }
                _ => {
                    ctl.resume();
                }
            }
        }
        ctl.end();

        let report = ctl.report().unwrap();
        let sum: f64 = report.rows.iter().map(|r| r.seconds).sum();
        assert!(
            (sum - report.total_seconds).abs() < TOLERANCE,
            "seed {seed}: per-slide {sum} vs total {}",
            report.total_seconds
        );
        let pct: f64 = report.rows.iter().map(|r| r.percentage).sum();
        if report.total_seconds > 0.0 {
            assert!((pct - 100.0).abs() < 1e-3);
        }
    }
}

#[test]
fn pause_resume_cycles_do_not_drift() {
    let (mut steady, steady_clock) = presenting(2);
    let (mut chopped, chopped_clock) = presenting(2);

    // same 6s of running time; the chopped session pauses five times for 1s each
    steady_clock.advance_secs(6.0);
    for _ in 0..5 {
        chopped_clock.advance_secs(1.2);
        chopped.pause();
        chopped_clock.advance_secs(1.0);
        chopped.resume();
    }
    steady.next();
    chopped.next();

    let now_s = steady_clock.now();
    let now_c = chopped_clock.now();
    let a = steady.session().unwrap().per_slide_elapsed(now_s)[0];
    let b = chopped.session().unwrap().per_slide_elapsed(now_c)[0];
    assert!((a - 6.0).abs() < TOLERANCE);
    assert!((a - b).abs() < TOLERANCE);
}

#[test]
fn revisiting_accumulates() {
    let (mut ctl, clock) = presenting(2);
    clock.advance_secs(5.0);
    ctl.next();
    clock.advance_secs(4.0);
    ctl.previous();
    clock.advance_secs(3.0);
    ctl.end();

    let report = ctl.report().unwrap();
    assert!((report.rows[0].seconds - 8.0).abs() < TOLERANCE);
}

#[test]
fn zero_total_reports_zero_percent() {
    let (mut ctl, _clock) = presenting(5);
    ctl.next();
    ctl.next();
    ctl.end();
    let report = ctl.report().unwrap();
    assert!(report.rows.iter().all(|r| r.formatted_percentage() == "0.0%"));
}

#[test]
fn live_polling_does_not_change_results() {
    let (mut polled, polled_clock) = presenting(3);
    let (mut quiet, quiet_clock) = presenting(3);

    for step in 0..30 {
        polled_clock.advance_secs(0.1);
        quiet_clock.advance_secs(0.1);
        let _ = polled.snapshot();
        let _ = polled.snapshot();
        if step == 10 {
            polled.next();
            quiet.next();
        }
    }
    polled.end();
    quiet.end();
    assert_eq!(polled.report(), quiet.report());
}

#[test]
fn notes_mismatch_leaves_deck_untouched() {
    let clock = ManualClock::new();
    let mut ctl = SessionController::with_clock(clock.clone());
    ctl.load_deck(Box::new(CountedDeck::new(4)));
    ctl.load_notes(NotesDocument::build("# a\nonly one"));
    ctl.start();

    assert!(ctl.last());
    let frame = ctl.snapshot().unwrap();
    assert_eq!(frame.total_slides, 4);
    assert_eq!(frame.slide_index, 3);
    assert_eq!(frame.notes, None);
}
