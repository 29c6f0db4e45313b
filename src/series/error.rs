use std::path::PathBuf;

use crate::error::ErrorKind;

/// Errors that can occur while loading a coverage series
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    /// The input path does not exist or could not be read
    #[error("Coverage file not found or unreadable: {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing column, unparsable value, or row/header width mismatch
    #[error("Malformed coverage data in {origin}{}: {detail}", line_suffix(.line))]
    MalformedInput {
        origin: String,
        line: Option<u64>,
        detail: String,
    },
}

impl SeriesError {
    pub(crate) fn malformed(origin: &str, line: Option<u64>, detail: impl Into<String>) -> Self {
        SeriesError::MalformedInput {
            origin: origin.to_string(),
            line,
            detail: detail.into(),
        }
    }

    /// Classify this error within the crate-wide taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeriesError::FileNotFound { .. } => ErrorKind::FileNotFound,
            SeriesError::MalformedInput { .. } => ErrorKind::MalformedInput,
        }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    match line {
        Some(line) => format!(" (line {})", line),
        None => String::new(),
    }
}
