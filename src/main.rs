use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    fs::{self, OpenOptions},
    io::{self, stdin},
    path::{Path, PathBuf},
    time::Duration,
};

use podium::{
    app::{App, AppAction},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    controller::SessionController,
    deck::{CountedDeck, TextDeck},
    demo,
    error::read_text,
    notes::NotesDocument,
    report::ReportStore,
    runtime::{CrosstermEventSource, FixedTicker, PresenterEvent, Runner},
};

const MIN_TICK_RATE_MS: u64 = 10;

/// terminal presenter with synchronized speaker notes and per-slide timing
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal presenter: shows your slides and speaker notes side by side, times every slide across pauses and revisits, and ends with a time-allocation report."
)]
pub struct Cli {
    /// slide deck: text file with slides separated by a separator line
    #[clap(short = 'd', long, conflicts_with_all = ["slides", "demo"])]
    deck: Option<PathBuf>,

    /// speaker notes: markdown with one top-level `#` section per slide
    #[clap(short = 'n', long)]
    notes: Option<PathBuf>,

    /// number of slides shown elsewhere (e.g. on a projector), instead of a deck file
    #[clap(short = 's', long, conflicts_with = "demo")]
    slides: Option<usize>,

    /// load the bundled demo deck and notes
    #[clap(long)]
    demo: bool,

    /// line that separates slides in a deck file
    #[clap(long)]
    separator: Option<String>,

    /// display refresh interval in milliseconds
    #[clap(long)]
    tick_rate_ms: Option<u64>,

    /// start with the notes panel hidden
    #[clap(long)]
    hide_notes: bool,

    /// append every finished report to the CSV history
    #[clap(long)]
    export: bool,

    /// print the final report as JSON instead of a table
    #[clap(long)]
    json: bool,

    /// write logs to this file instead of the state directory
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// log debug detail
    #[clap(short = 'v', long)]
    verbose: bool,

    /// persist the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line flags override the stored config
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(sep) = &self.separator {
            cfg.slide_separator = sep.clone();
        }
        if let Some(ms) = self.tick_rate_ms {
            cfg.tick_rate_ms = ms;
        }
        if self.hide_notes {
            cfg.show_notes = false;
        }
        if self.export {
            cfg.export_reports = true;
        }
        cfg.tick_rate_ms = cfg.tick_rate_ms.max(MIN_TICK_RATE_MS);
        cfg
    }
}

/// Route logs to a file; the terminal belongs to the UI.
fn init_logging(cli: &Cli) -> Result<Option<PathBuf>> {
    let Some(path) = cli.log_file.clone().or_else(AppDirs::log_path) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing the logger")?;
    Ok(Some(path))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_inputs(cli: &Cli, cfg: &Config, controller: &mut SessionController) -> Result<()> {
    if cli.demo {
        let (deck, notes) = demo::load(&cfg.slide_separator)?;
        controller.load_deck(Box::new(deck));
        controller.load_notes(notes);
    }

    if let Some(path) = &cli.deck {
        let raw = read_text(path).with_context(|| format!("loading deck {}", path.display()))?;
        let deck = TextDeck::parse(file_label(path), &raw, &cfg.slide_separator);
        controller.load_deck(Box::new(deck));
    }

    if let Some(count) = cli.slides {
        controller.load_deck(Box::new(CountedDeck::new(count)));
    }

    if let Some(path) = &cli.notes {
        let raw = read_text(path).with_context(|| format!("loading notes {}", path.display()))?;
        controller.load_notes(NotesDocument::build(&raw));
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match init_logging(&cli) {
        Ok(Some(path)) => log::info!(
            "podium {} logging to {}",
            env!("CARGO_PKG_VERSION"),
            path.display()
        ),
        Ok(None) => {}
        // still on the plain terminal here, so the warning stays visible
        Err(err) => eprintln!("warning: logging disabled: {err:#}"),
    }

    let store = FileConfigStore::new();
    let cfg = cli.apply(store.load());
    if cli.save_config {
        store
            .save(&cfg)
            .with_context(|| format!("saving config to {}", store.path().display()))?;
    }

    let mut controller = SessionController::new();
    load_inputs(&cli, &cfg, &mut controller)?;

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let mut app = App::new(controller);
    app.show_notes = cfg.show_notes;
    app.auto_export = cfg.export_reports;
    app.report_store = AppDirs::report_history_path().map(ReportStore::with_path);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let outcome = start_tui(&mut terminal, &mut app, cfg.tick_rate_ms);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    outcome?;

    if let Some(report) = app.controller.report() {
        if cli.json {
            println!("{}", report.to_json()?);
        } else {
            print!("{}", report.to_text());
        }
    }

    Ok(())
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate_ms: u64,
) -> Result<()> {
    let mut runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(tick_rate_ms)),
    );

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        let action = match runner.step() {
            PresenterEvent::Tick => app.on_tick(),
            PresenterEvent::Resize => AppAction::Redraw,
            PresenterEvent::Key(key) => app.on_key(key),
            PresenterEvent::Closed => {
                log::warn!("terminal input closed, leaving the presenter");
                AppAction::Quit
            }
        };

        match action {
            AppAction::Quit => break,
            AppAction::Redraw => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            AppAction::Continue => {}
        }
    }

    Ok(())
}
