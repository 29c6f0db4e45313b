//! # Coverage Series
//!
//! A coverage series is the ordered list of `(x, y)` samples recorded by one
//! coverage run, e.g. cumulative covered branches (`y`) after each test
//! iteration (`x`). Series are read from delimited text tables with a header
//! row; the `x` and `y` columns are located by name and any other columns
//! are ignored.
//!
//! ```text
//! x,y
//! 1,10
//! 2,25
//! 3,40
//! ```
//!
//! Loading is strict: every data row must carry a numeric, finite value in
//! both columns and have as many fields as the header. Nothing is skipped
//! or coerced, so a loaded series always mirrors the file row for row.

mod error;
mod reader;


use serde::{Deserialize, Serialize};

pub use error::SeriesError;
pub use reader::{load_series, load_series_from_reader, LoadOptions, X_COLUMN, Y_COLUMN};

/// A single coverage measurement
///
/// Both coordinates are stored as `f64`. Integer values are exact up to
/// 2^53 (9007199254740992); larger integers load as the nearest
/// representable `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Test-progress metric (iteration, elapsed tests, time)
    pub x: f64,
    /// Cumulative coverage metric (count or percentage)
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A labelled, ordered sequence of coverage samples from one run
///
/// Samples keep the row order of the source table. The series is immutable
/// once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageSeries {
    label: String,
    samples: Vec<Sample>,
}

impl CoverageSeries {
    /// Create a series from already-parsed samples
    pub fn new(label: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self {
            label: label.into(),
            samples,
        }
    }

    /// Human-readable name of the run, used as the trace name in charts
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Smallest and largest `x`, or `None` for an empty series
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.samples.iter().map(|s| s.x))
    }

    /// Smallest and largest `y`, or `None` for an empty series
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.samples.iter().map(|s| s.y))
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
