//! Crate-wide error taxonomy.
//!
//! Each module reports failures through its own error enum; [`Error`] wraps
//! them for callers that drive the whole load → build → display flow, and
//! [`ErrorKind`] gives the coarse classification shared by all of them.

use std::fmt;

use crate::chart::ChartError;
use crate::comparison::ConfigError;
use crate::display::DisplayError;
use crate::series::SeriesError;

/// Coarse classification of every failure the crate can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input path missing or unreadable
    FileNotFound,
    /// Missing column, unparsable number, or row/column-count mismatch
    MalformedInput,
    /// Nothing to plot, or an unusable chart description
    InvalidInput,
    /// No rendering backend or output target available
    DisplayError,
    /// Incomplete or inconsistent comparison configuration
    ConfigError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::FileNotFound => "file not found",
            ErrorKind::MalformedInput => "malformed input",
            ErrorKind::InvalidInput => "invalid input",
            ErrorKind::DisplayError => "display error",
            ErrorKind::ConfigError => "configuration error",
        };
        f.write_str(name)
    }
}

/// Any error raised while running a comparison
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Series(e) => e.kind(),
            Error::Chart(e) => e.kind(),
            Error::Display(e) => e.kind(),
            Error::Config(e) => e.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
