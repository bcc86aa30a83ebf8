use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use crate::{app::App, clock::Clock, report::ReportRow};

use super::screen::Screen;

/// Pure presenter for a single report row
pub fn present_row(row: &ReportRow, longest: bool) -> Row<'static> {
    let share_color = if row.percentage >= 25.0 {
        Color::Red
    } else if row.percentage >= 10.0 {
        Color::Yellow
    } else {
        Color::Green
    };

    let style = if longest {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(row.slide_number.to_string()),
        Cell::from(row.formatted_time()),
        Cell::from(row.formatted_percentage()).style(Style::default().fg(share_color)),
    ])
    .style(style)
}

/// Results screen - per-slide time allocation and the grand total
pub struct ResultsScreen;

impl<C: Clock> Screen<C> for ResultsScreen {
    fn render(&self, app: &App<C>, area: Rect, buf: &mut Buffer) {
        let Some(report) = app.controller.report() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(super::HORIZONTAL_MARGIN)
            .vertical_margin(super::VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(3), // total
                Constraint::Min(0),    // table
                Constraint::Length(1), // status
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(
            format!("Total time {}", report.formatted_total()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL).title(" Session report "))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        let longest = report.longest().map(|r| r.slide_number);
        let header = Row::new(vec![
            Cell::from("Slide"),
            Cell::from("Time"),
            Cell::from("Share"),
        ])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = report
            .rows
            .iter()
            .map(|row| present_row(row, Some(row.slide_number) == longest))
            .collect();

        Table::new(
            rows,
            &[
                Constraint::Length(8),
                Constraint::Length(10),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Time per slide "))
        .render(chunks[1], buf);

        if let Some(status) = &app.status {
            Paragraph::new(Span::styled(
                status.clone(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ))
            .render(chunks[2], buf);
        }

        Paragraph::new(Span::styled(
            "(r)estart / (e)xport / (q)uit",
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .render(chunks[3], buf);
    }
}
