use std::path::PathBuf;

use crate::error::ErrorKind;

/// Errors that can occur while rendering or showing a chart
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// No rendering backend exists for the requested output
    #[error("No rendering backend for '{}': {reason}", .path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },

    /// The output location cannot receive an artifact
    #[error("Output target unavailable: {0}")]
    OutputUnavailable(String),

    /// Drawing area, chart layout, font, or backend failure
    #[error("Failed to render chart: {0}")]
    Drawing(String),

    /// The platform viewer could not be launched or reported failure
    #[error("Failed to open chart viewer: {0}")]
    Viewer(String),
}

impl DisplayError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::DisplayError
    }
}
