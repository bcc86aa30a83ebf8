use chrono::{DateTime, Local};
use itertools::Itertools;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::util::{format_time, percentage_of};

/// Time spent on one slide
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based slide number
    pub slide_number: usize,
    pub seconds: f64,
    pub percentage: f64,
}

impl ReportRow {
    pub fn formatted_time(&self) -> String {
        format_time(self.seconds, false)
    }

    pub fn formatted_percentage(&self) -> String {
        format!("{:.1}%", self.percentage)
    }
}

/// Post-session time allocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_seconds: f64,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn from_elapsed(per_slide: &[f64], total_seconds: f64) -> Self {
        let rows = per_slide
            .iter()
            .enumerate()
            .map(|(idx, &seconds)| ReportRow {
                slide_number: idx + 1,
                seconds,
                percentage: percentage_of(seconds, total_seconds),
            })
            .collect();

        Self {
            total_seconds,
            rows,
        }
    }

    pub fn formatted_total(&self) -> String {
        format_time(self.total_seconds, true)
    }

    /// Slide that took the most time, if any time was recorded.
    pub fn longest(&self) -> Option<&ReportRow> {
        self.rows
            .iter()
            .filter(|r| r.seconds > 0.0)
            .max_by(|a, b| a.seconds.total_cmp(&b.seconds))
    }

    /// Plain-text table for printing after the session
    pub fn to_text(&self) -> String {
        let header = format!("{:>5}  {:>8}  {:>6}", "Slide", "Time", "Share");
        let body = self
            .rows
            .iter()
            .map(|r| {
                format!(
                    "{:>5}  {:>8}  {:>6}",
                    r.slide_number,
                    r.formatted_time(),
                    r.formatted_percentage()
                )
            })
            .join("\n");
        let footer = format!("Total  {}", self.formatted_total());

        if body.is_empty() {
            format!("{header}\n{footer}\n")
        } else {
            format!("{header}\n{body}\n{footer}\n")
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Serialize)]
struct HistoryRecord<'a> {
    date: String,
    deck: &'a str,
    slide_number: usize,
    seconds: f64,
    percentage: f64,
    total_seconds: f64,
}

/// Appends finished reports to a CSV history file
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row per slide, stamped with `at`. A header is written only
    /// when the file is new.
    pub fn append(&self, report: &Report, deck: &str, at: DateTime<Local>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // If the history file doesn't exist, we need to emit a header
        let needs_header = !self.path.exists();

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);

        let date = at.format("%c").to_string();
        for row in &report.rows {
            writer.serialize(HistoryRecord {
                date: date.clone(),
                deck,
                slide_number: row.slide_number,
                seconds: row.seconds,
                percentage: row.percentage,
                total_seconds: report.total_seconds,
            })?;
        }
        writer.flush()?;

        log::info!(
            "appended {} report row(s) to {}",
            report.rows.len(),
            self.path.display()
        );
        Ok(())
    }
}
