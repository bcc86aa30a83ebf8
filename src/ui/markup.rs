//! Light terminal styling for speaker notes.
//!
//! Works line by line and never rewrites the text beyond dropping markers
//! (heading hashes, bullet dashes, quote arrows, code fences).

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

pub const NO_NOTES: &str = "No notes for this slide";

pub fn render_markup(segment: &str) -> Text<'static> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let quote = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC);
    let code = Style::default().fg(Color::Yellow);

    let mut in_fence = false;
    let mut lines = Vec::new();

    for raw in segment.lines() {
        let trimmed = raw.trim_start();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            lines.push(Line::from(Span::styled(format!("  {raw}"), code)));
            continue;
        }

        let line = if let Some(rest) = heading_text(trimmed) {
            Line::from(Span::styled(rest.to_string(), heading))
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            // leading whitespace may be multi-byte, such as a no-break space
            let indent = raw.chars().count() - trimmed.chars().count();
            Line::from(vec![
                Span::raw(format!("{}• ", " ".repeat(indent))),
                Span::raw(rest.to_string()),
            ])
        } else if let Some(rest) = trimmed.strip_prefix('>') {
            Line::from(Span::styled(format!("│ {}", rest.trim_start()), quote))
        } else {
            Line::from(raw.to_string())
        };
        lines.push(line);
    }

    Text::from(lines)
}

fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if rest.starts_with([' ', '\t']) {
        Some(rest.trim())
    } else {
        None
    }
}

pub fn placeholder() -> Text<'static> {
    Text::from(Line::from(Span::styled(
        NO_NOTES,
        Style::default()
            .add_modifier(Modifier::DIM)
            .add_modifier(Modifier::ITALIC),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| &*s.content).collect::<String>())
            .collect()
    }

    #[test]
    fn headings_drop_hashes() {
        let text = render_markup("## Detail\nbody");
        assert_eq!(plain(&text), vec!["Detail", "body"]);
        assert!(text.lines[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn hash_without_space_is_plain() {
        assert_eq!(plain(&render_markup("#tag")), vec!["#tag"]);
        assert_eq!(plain(&render_markup("####### seven")), vec!["####### seven"]);
    }

    #[test]
    fn bullets_and_quotes() {
        let text = render_markup("- one\n  * two\n> aside");
        assert_eq!(plain(&text), vec!["• one", "  • two", "│ aside"]);
    }

    #[test]
    fn bullet_indent_counts_characters() {
        let text = render_markup("\u{a0}\u{a0}- wide\n\t* tab");
        assert_eq!(plain(&text), vec!["  • wide", " • tab"]);
    }

    #[test]
    fn code_fences_are_hidden_and_body_kept() {
        let text = render_markup("```\nlet x = 1;\n```\nafter");
        assert_eq!(plain(&text), vec!["  let x = 1;", "after"]);
    }

    #[test]
    fn placeholder_text() {
        assert_eq!(plain(&placeholder()), vec![NO_NOTES]);
    }
}
