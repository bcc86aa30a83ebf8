use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

use crate::{app::App, clock::Clock, controller::DisplayFrame, util};

use super::{markup, screen::Screen};

/// Presenting screen - slide viewer, notes panel, timers and progress
pub struct PresentingScreen;

impl<C: Clock> Screen<C> for PresentingScreen {
    fn render(&self, app: &App<C>, area: Rect, buf: &mut Buffer) {
        let Some(frame) = app.controller.snapshot() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(super::HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(1), // progress
                Constraint::Min(0),    // slide + notes
                Constraint::Length(1), // legend
            ])
            .split(area);

        render_header(&frame, chunks[0], buf);

        Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta))
            .ratio(frame.progress.clamp(0.0, 1.0))
            .label("")
            .render(chunks[1], buf);

        let body = if app.show_notes {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[2])
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(100)])
                .split(chunks[2])
        };

        let viewer = Block::default().borders(Borders::ALL);
        let inner = viewer.inner(body[0]);
        viewer.render(body[0], buf);

        if let Some(deck) = app.controller.deck() {
            let (page_w, page_h) = deck.page_size(frame.slide_index);
            let scale = util::fit_scale(
                inner.width as f64,
                inner.height as f64,
                page_w as f64,
                page_h as f64,
            );
            deck.render(frame.slide_index, inner, buf, scale);
        }

        if app.show_notes && body.len() > 1 {
            let notes = match frame.notes.as_deref() {
                Some(segment) => markup::render_markup(segment),
                None => markup::placeholder(),
            };
            Paragraph::new(notes)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" Notes · slide {} ", frame.slide_index + 1)),
                )
                .wrap(Wrap { trim: false })
                .render(body[1], buf);
        }

        // arrows are hidden at the ends of the deck, where they would be inert
        let (at_first, at_last) = app
            .controller
            .session()
            .map_or((true, true), |s| (s.is_first(), s.is_last()));
        let mut legend = Vec::new();
        if !at_first {
            legend.push("(←) back");
        }
        if !at_last {
            legend.push("(→) next");
        }
        legend.push(if frame.paused { "(space) resume" } else { "(space) pause" });
        legend.extend(["(tab) notes", "(esc) end"]);

        Paragraph::new(Span::styled(
            legend.join(" / "),
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .render(chunks[3], buf);
    }
}

fn render_header(frame: &DisplayFrame, area: Rect, buf: &mut Buffer) {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(0),
            Constraint::Length(30),
        ])
        .split(area);

    Paragraph::new(Span::styled(
        format!("Slide {} / {}", frame.slide_index + 1, frame.total_slides),
        bold,
    ))
    .render(columns[0], buf);

    if frame.paused {
        Paragraph::new(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        ))
        .alignment(Alignment::Center)
        .render(columns[1], buf);
    }

    let total_style = if frame.paused {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    Paragraph::new(Line::from(vec![
        Span::raw("Total "),
        Span::styled(util::format_time(frame.running_total, true), total_style),
        Span::raw("  Slide "),
        Span::styled(util::format_time(frame.running_slide_time, false), bold),
    ]))
    .alignment(Alignment::Right)
    .render(columns[2], buf);
}
