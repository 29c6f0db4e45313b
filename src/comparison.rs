//! # Comparison Runs
//!
//! Ties the pieces together: a [`ComparisonConfig`] names the input tables,
//! their labels and the chart title, and [`run`] performs the one linear
//! flow the tool exists for:
//!
//! 1. load every series (all of them must succeed)
//! 2. build the comparison chart
//! 3. display it
//!
//! Nothing is rendered unless every load and the build succeeded, so a
//! failing input never produces a partial or truncated chart.
//!
//! ```rust,no_run
//! use coverage_compare::comparison::{run, ComparisonConfig, SeriesSource};
//! use coverage_compare::display::DisplayOptions;
//!
//! let config = ComparisonConfig::new("Memcached coverage")
//!     .with_series(SeriesSource::new("With harness", "with/memcached_coverage.txt"))
//!     .with_series(SeriesSource::new("Without harness", "without/memcached_coverage.txt"));
//!
//! let written = run(&config, &DisplayOptions::new("coverage.svg"))?;
//! println!("chart written to {}", written.display());
//! # Ok::<(), coverage_compare::Error>(())
//! ```

use std::path::PathBuf;

use log::info;

use crate::chart::{ComparisonChart, ComparisonChartBuilder, LayerOrder};
use crate::display::{display, DisplayOptions};
use crate::error::{ErrorKind, Result};
use crate::series::{load_series, CoverageSeries, LoadOptions};

/// Errors in a comparison configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting was not provided
    #[error("Missing required setting: {0}")]
    MissingField(String),

    /// A setting was provided with an unusable value
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ConfigError
    }
}

/// One input table and the label its trace is shown under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSource {
    /// Legend label, e.g. "With harness"
    pub label: String,
    /// Path of the delimited coverage table
    pub path: PathBuf,
    /// Field delimiter; inferred from the extension when `None`
    pub delimiter: Option<char>,
}

impl SeriesSource {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            delimiter: None,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Tokenizer settings for this source
    pub fn load_options(&self) -> std::result::Result<LoadOptions, ConfigError> {
        match self.delimiter {
            None => Ok(LoadOptions::for_path(&self.path)),
            Some(c) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => {
                Ok(LoadOptions::default().with_delimiter(c as u8))
            }
            Some(c) => Err(ConfigError::InvalidValue {
                field: format!("delimiter of series '{}'", self.label),
                reason: format!("{:?} is not a usable single-byte delimiter", c),
            }),
        }
    }

    /// Load this source as a coverage series
    pub fn load(&self) -> Result<CoverageSeries> {
        let options = self.load_options()?;
        Ok(load_series(&self.path, self.label.clone(), &options)?)
    }
}

/// Everything needed to build one comparison chart
///
/// Title, labels and paths are required; only the axis descriptions and the
/// layer order have defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    pub title: String,
    pub series: Vec<SeriesSource>,
    pub layer_order: LayerOrder,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl ComparisonConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            layer_order: LayerOrder::default(),
            x_label: None,
            y_label: None,
        }
    }

    pub fn with_series(mut self, source: SeriesSource) -> Self {
        self.series.push(source);
        self
    }

    pub fn with_layer_order(mut self, order: LayerOrder) -> Self {
        self.layer_order = order;
        self
    }

    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    /// Check that every required setting is present
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::MissingField("title".to_string()));
        }

        if self.series.is_empty() {
            return Err(ConfigError::MissingField("series".to_string()));
        }

        for (index, source) in self.series.iter().enumerate() {
            if source.label.trim().is_empty() {
                return Err(ConfigError::MissingField(format!("label of series #{}", index + 1)));
            }
            if source.path.as_os_str().is_empty() {
                return Err(ConfigError::MissingField(format!(
                    "path of series '{}'",
                    source.label
                )));
            }
            source.load_options()?;
        }

        Ok(())
    }

    /// Load every configured series in order, stopping at the first failure
    pub fn load_series(&self) -> Result<Vec<CoverageSeries>> {
        self.validate()?;

        self.series
            .iter()
            .map(|source| -> Result<CoverageSeries> {
                let series = source.load()?;
                info!(
                    "Loaded '{}' from {} ({} samples)",
                    series.label(),
                    source.path.display(),
                    series.len()
                );
                Ok(series)
            })
            .collect()
    }

    /// Load every series and build the chart, without rendering
    pub fn build_chart(&self) -> Result<ComparisonChart> {
        let series = self.load_series()?;

        let mut builder = ComparisonChartBuilder::new(&self.title)
            .layer_order(self.layer_order)
            .add_all(series);
        if let Some(label) = &self.x_label {
            builder = builder.x_label(label);
        }
        if let Some(label) = &self.y_label {
            builder = builder.y_label(label);
        }

        Ok(builder.build()?)
    }
}

/// Load, build and display a comparison chart
///
/// Returns the path of the rendered artifact.
pub fn run(config: &ComparisonConfig, options: &DisplayOptions) -> Result<PathBuf> {
    let chart = config.build_chart()?;
    info!(
        "Built chart '{}' with traces (bottom to top): {}",
        chart.title(),
        chart.trace_names().join(", ")
    );

    Ok(display(&chart, options)?)
}
