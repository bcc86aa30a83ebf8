//! Error types for loading presenter inputs and writing reports.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the edges of the presenter (files in, reports out).
///
/// The session core never produces these: invalid transitions are no-ops.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an input file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file was not valid UTF-8 text.
    #[error("{0} is not valid UTF-8 text")]
    NotText(PathBuf),

    /// Embedded demo content is missing from the build.
    #[error("embedded demo file {0} not found")]
    MissingDemo(&'static str),

    /// Writing a report or config failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a whole file as UTF-8 text, keeping the path in the error.
pub fn read_text(path: &std::path::Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| Error::NotText(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn read_text_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.md");
        let err = read_text(&path).unwrap_err();
        assert_matches!(err, Error::Read { ref path, .. } if path.ends_with("nope.md"));
        assert!(err.to_string().contains("nope.md"));
    }

    #[test]
    fn read_text_rejects_binary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deck.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert_matches!(read_text(&path), Err(Error::NotText(_)));
    }

    #[test]
    fn read_text_ok() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "# One\nhello").unwrap();
        assert_eq!(read_text(&path).unwrap(), "# One\nhello");
    }
}
