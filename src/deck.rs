//! Slide deck sources.
//!
//! The presenter only needs a page count, each page's native size and a way
//! to draw a page into a region of the terminal at a chosen scale.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::util::fitted_rect;

pub const DEFAULT_SEPARATOR: &str = "---";

/// A loaded deck, addressable by 0-based page index.
pub trait DeckSource {
    fn page_count(&self) -> usize;

    /// Native (scale 1) page size in terminal cells.
    fn page_size(&self, index: usize) -> (u16, u16);

    /// Draw page `index` into `area` at `scale`. Out-of-range indices draw nothing.
    fn render(&self, index: usize, area: Rect, buf: &mut Buffer, scale: f64);

    /// Short human-readable label, used in the setup screen and report history.
    fn label(&self) -> &str;
}

/// Text deck: slides separated by a line holding only the separator.
#[derive(Debug, Clone)]
pub struct TextDeck {
    label: String,
    slides: Vec<String>,
}

impl TextDeck {
    pub fn parse(label: impl Into<String>, raw: &str, separator: &str) -> Self {
        let mut slides = Vec::new();
        let mut current = Vec::new();

        for line in raw.lines() {
            if line.trim() == separator {
                slides.push(current.join("\n"));
                current.clear();
            } else {
                current.push(line);
            }
        }
        slides.push(current.join("\n"));

        let slides: Vec<String> = slides
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let label = label.into();
        log::debug!("deck {label} parsed into {} slide(s)", slides.len());
        Self { label, slides }
    }

    pub fn slide(&self, index: usize) -> Option<&str> {
        self.slides.get(index).map(String::as_str)
    }
}

impl DeckSource for TextDeck {
    fn page_count(&self) -> usize {
        self.slides.len()
    }

    fn page_size(&self, index: usize) -> (u16, u16) {
        let Some(slide) = self.slide(index) else {
            return (1, 1);
        };
        let width = slide.lines().map(|l| l.width()).max().unwrap_or(1).max(1);
        let height = slide.lines().count().max(1);
        (
            width.min(u16::MAX as usize) as u16,
            height.min(u16::MAX as usize) as u16,
        )
    }

    fn render(&self, index: usize, area: Rect, buf: &mut Buffer, scale: f64) {
        let Some(slide) = self.slide(index) else {
            return;
        };
        let page = self.page_size(index);
        let target = fitted_rect(area, page, scale);

        let heading_style = Style::default().add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = slide
            .lines()
            .map(|line| {
                if line.starts_with('#') {
                    Line::from(Span::styled(
                        line.trim_start_matches('#').trim().to_string(),
                        heading_style,
                    ))
                } else {
                    Line::from(line.to_string())
                }
            })
            .collect();

        // pad to center the text vertically when the page is scaled up
        let pad = target.height.saturating_sub(page.1) / 2;
        for _ in 0..pad {
            lines.insert(0, Line::default());
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .render(target, buf);
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Placeholder deck for slides shown elsewhere (e.g. on a projector); only
/// the slide count is known.
#[derive(Debug, Clone)]
pub struct CountedDeck {
    label: String,
    pages: usize,
}

impl CountedDeck {
    pub const PAGE_SIZE: (u16, u16) = (32, 9);

    pub fn new(pages: usize) -> Self {
        Self {
            label: format!("{pages} external slide(s)"),
            pages,
        }
    }
}

impl DeckSource for CountedDeck {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn page_size(&self, _index: usize) -> (u16, u16) {
        Self::PAGE_SIZE
    }

    fn render(&self, index: usize, area: Rect, buf: &mut Buffer, scale: f64) {
        if index >= self.pages {
            return;
        }
        let target = fitted_rect(area, Self::PAGE_SIZE, scale);
        let inner_pad = target.height.saturating_sub(3) / 2;
        let mut lines = vec![Line::default(); inner_pad as usize];
        lines.push(Line::from(Span::styled(
            format!("Slide {}", index + 1),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(target, buf);
    }

    fn label(&self) -> &str {
        &self.label
    }
}
