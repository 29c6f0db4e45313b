//! # coverage-compare - Overlay Coverage Runs on One Chart
//!
//! `coverage-compare` loads coverage-over-time tables produced by separate
//! test runs and draws them as overlaid line traces on a single chart, so
//! runs made under different test configurations (for example with and
//! without a coordinated-scheduling harness) can be compared at a glance.
//!
//! ## Key Features
//!
//! - **Strict Tabular Loading**: `x`/`y` columns are found by header name,
//!   extra columns are ignored, and any unparsable or misaligned row fails
//!   the load with the file and line that caused it.
//!
//! - **Explicit Layering**: trace draw order is a documented parameter
//!   ([`chart::LayerOrder`]) rather than a side effect of load order.
//!
//! - **Shared Coordinate Grid**: every trace is plotted against one pair of
//!   axes covering all samples.
//!
//! - **Configuration over Hardcoding**: inputs, labels and title come from a
//!   [`comparison::ComparisonConfig`] (or a TOML file via the CLI).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coverage_compare::chart::{build_comparison_chart, LayerOrder};
//! use coverage_compare::display::{display, DisplayOptions};
//! use coverage_compare::series::{load_series, LoadOptions};
//!
//! let options = LoadOptions::default();
//! let with = load_series("with/memcached_coverage.txt", "With harness", &options)?;
//! let without = load_series("without/memcached_coverage.txt", "Without harness", &options)?;
//!
//! let chart = build_comparison_chart(
//!     vec![with, without],
//!     "Memcached coverage",
//!     LayerOrder::AsGiven,
//! )?;
//!
//! display(&chart, &DisplayOptions::new("coverage.svg"))?;
//! # Ok::<(), coverage_compare::Error>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`series`]: coverage samples and the delimited-table loader
//! - [`chart`]: comparison chart construction, layering and the shared grid
//! - [`display`]: rendering with `plotters` and the platform viewer
//! - [`comparison`]: configuration and the load → build → display flow
//! - [`report`]: per-series summaries for inspection
//! - [`error`]: the crate-wide error taxonomy

pub mod chart;
pub mod comparison;
pub mod display;
pub mod error;
pub mod report;
pub mod series;

pub use chart::{build_comparison_chart, ComparisonChart, ComparisonChartBuilder, LayerOrder, Trace};
pub use comparison::{run, ComparisonConfig, SeriesSource};
pub use display::{display, DisplayOptions};
pub use error::{Error, ErrorKind};
pub use series::{load_series, CoverageSeries, LoadOptions, Sample};
