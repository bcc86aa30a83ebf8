//! Speaker notes split into one segment per slide.

use std::sync::OnceLock;

use regex::Regex;

/// Top-level heading line: a single `#`, horizontal whitespace, heading text.
fn heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?m)^#[ \t]+.+$").expect("static regex"))
}

/// Immutable list of notes segments, indexed by slide position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesDocument {
    segments: Vec<String>,
}

impl NotesDocument {
    /// Split `raw` at every top-level heading. Heading lines are dropped,
    /// segments trimmed and empty ones discarded. Without any non-empty section
    /// the whole trimmed document becomes the single segment.
    pub fn build(raw: &str) -> Self {
        let mut segments: Vec<String> = heading_pattern()
            .split(raw)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if segments.is_empty() {
            segments.push(raw.trim().to_string());
        }

        log::debug!("notes split into {} segment(s)", segments.len());
        Self { segments }
    }

    /// Notes for `index`, or None when the slide has none.
    pub fn segment_for(&self, index: usize) -> Option<&str> {
        self.segments
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
