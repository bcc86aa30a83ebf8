use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{app::App, clock::Clock, session::Phase};

use super::{presenting::PresentingScreen, results::ResultsScreen};

/// A UI Screen boundary: one per presenter phase
pub trait Screen<C: Clock> {
    fn render(&self, app: &App<C>, area: Rect, buf: &mut Buffer);
}

/// Setup screen - shows which inputs are loaded and whether a start is possible
pub struct SetupScreen;

impl<C: Clock> Screen<C> for SetupScreen {
    fn render(&self, app: &App<C>, area: Rect, buf: &mut Buffer) {
        let ctl = &app.controller;
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(super::HORIZONTAL_MARGIN)
            .vertical_margin(super::VERTICAL_MARGIN)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(6),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let loaded = Style::default().fg(Color::Green);
        let missing = Style::default().fg(Color::Yellow);

        let deck_line = match ctl.deck() {
            Some(deck) => Line::from(vec![
                Span::styled("Deck:  ", bold),
                Span::styled(
                    format!("{} ({} slides)", deck.label(), deck.page_count()),
                    if deck.page_count() > 0 { loaded } else { missing },
                ),
            ]),
            None => Line::from(vec![
                Span::styled("Deck:  ", bold),
                Span::styled("not loaded", missing),
            ]),
        };
        let notes_line = match ctl.notes() {
            Some(notes) => Line::from(vec![
                Span::styled("Notes: ", bold),
                Span::styled(format!("{} segment(s)", notes.len()), loaded),
            ]),
            None => Line::from(vec![
                Span::styled("Notes: ", bold),
                Span::styled("not loaded", missing),
            ]),
        };

        Paragraph::new(vec![deck_line, Line::default(), notes_line])
            .block(Block::default().borders(Borders::ALL).title(" podium "))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let hint = if ctl.can_start() {
            Span::styled(
                "Ready when you are",
                Style::default().patch(bold).fg(Color::Green),
            )
        } else {
            Span::styled("Load a deck and speaker notes to start", dim)
        };
        Paragraph::new(Line::from(hint))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        let legend = if ctl.can_start() {
            "(enter) start / (?) help / (q)uit"
        } else {
            "(?) help / (q)uit"
        };
        Paragraph::new(Span::styled(
            legend,
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .render(chunks[4], buf);
    }
}

/// Helper to construct the appropriate screen for the current phase
pub fn current_screen<C: Clock>(phase: Phase) -> Box<dyn Screen<C>> {
    match phase {
        Phase::Setup => Box::new(SetupScreen),
        Phase::Presenting => Box::new(PresentingScreen),
        Phase::Ended => Box::new(ResultsScreen),
    }
}
