use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::markup::NO_NOTES;

const KEYS: &[(&str, &str)] = &[
    ("enter", "start the talk"),
    ("→ l pgdn", "next slide"),
    ("← h pgup", "previous slide"),
    ("home end", "first / last slide"),
    ("space p", "pause / resume"),
    ("tab", "show / hide notes"),
    ("esc", "end and show the report"),
    ("r e", "restart / export report"),
    ("ctrl+c", "quit"),
];

/// Key reference and input format, drawn over the current screen
pub struct HelpOverlay;

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().add_modifier(Modifier::DIM);

        let mut lines = vec![Line::from(Span::styled(
            "Keys",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.extend(KEYS.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{keys:>10}  "), key_style),
                Span::raw(*action),
            ])
        }));
        lines.push(Line::default());
        lines.push(Line::from("Notes: one `# heading` section per slide, in order."));
        lines.push(Line::from(format!("Slides without a section show \"{NO_NOTES}\".")));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("(esc) close", dim)));

        let popup = centered(area, 64, lines.len() as u16 + 2);
        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Help "))
            .wrap(Wrap { trim: false })
            .render(popup, buf);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
