//! # Comparison Charts
//!
//! A [`ComparisonChart`] is a render-ready description of several coverage
//! series overlaid on one set of axes. Building a chart is pure: it only
//! arranges the loaded series into traces, assigns colors, and fixes the
//! draw order. Nothing is drawn or written until the chart is handed to
//! [`crate::display`].
//!
//! ## Layering
//!
//! Traces are stored in draw order: the first trace is painted first and
//! every later trace is painted over it. [`LayerOrder`] makes that order an
//! explicit choice instead of a side effect of load order:
//!
//! - [`LayerOrder::AsGiven`]: the last input series ends up on top
//! - [`LayerOrder::Reversed`]: the first input series ends up on top
//!
//! Colors follow the *input* position, so flipping the layer order never
//! changes which color a run is drawn in.

mod error;
mod palette;


use serde::{Deserialize, Serialize};

use crate::series::CoverageSeries;

pub use error::ChartError;
pub use palette::{color_for, TraceColor, PALETTE};

/// Default x-axis description
pub const DEFAULT_X_LABEL: &str = "x";

/// Default y-axis description
pub const DEFAULT_Y_LABEL: &str = "y";

/// Draw order of traces relative to the order series were supplied in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerOrder {
    /// First series drawn first; the last series is on top
    #[default]
    AsGiven,
    /// Last series drawn first; the first series is on top
    Reversed,
}

/// One named line on the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    series: CoverageSeries,
    color: TraceColor,
}

impl Trace {
    /// Legend entry for this trace (the series label)
    pub fn name(&self) -> &str {
        self.series.label()
    }

    pub fn series(&self) -> &CoverageSeries {
        &self.series
    }

    pub fn color(&self) -> TraceColor {
        self.color
    }
}

/// Closed numeric interval covered by one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Smallest range containing every extent, widened when it would be
    /// empty or zero-width
    pub fn covering(extents: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let bounds = extents.into_iter().fold(None, |acc: Option<(f64, f64)>, (lo, hi)| {
            Some(match acc {
                None => (lo, hi),
                Some((min, max)) => (min.min(lo), max.max(hi)),
            })
        });

        match bounds {
            None => AxisRange { min: 0.0, max: 1.0 },
            Some((min, max)) if min < max => AxisRange { min, max },
            Some((value, _)) => {
                let pad = value.abs() * 0.05;
                // Zero and subnormal values leave no room after scaling.
                let pad = if value - pad < value + pad { pad } else { 1.0 };
                AxisRange {
                    min: value - pad,
                    max: value + pad,
                }
            }
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Coordinate space shared by every trace of a chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotGrid {
    pub x: AxisRange,
    pub y: AxisRange,
}

/// Overlaid coverage traces sharing one pair of axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    title: String,
    x_label: String,
    y_label: String,
    traces: Vec<Trace>,
}

impl ComparisonChart {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Traces in draw order; later traces are painted on top
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Trace names in draw order
    pub fn trace_names(&self) -> Vec<&str> {
        self.traces.iter().map(Trace::name).collect()
    }

    /// The single coordinate grid all traces are plotted against
    pub fn grid(&self) -> PlotGrid {
        PlotGrid {
            x: AxisRange::covering(self.traces.iter().filter_map(|t| t.series.x_extent())),
            y: AxisRange::covering(self.traces.iter().filter_map(|t| t.series.y_extent())),
        }
    }
}

/// Builder for [`ComparisonChart`]
#[derive(Debug, Clone)]
pub struct ComparisonChartBuilder {
    title: String,
    x_label: String,
    y_label: String,
    layer_order: LayerOrder,
    series: Vec<CoverageSeries>,
}

impl ComparisonChartBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            layer_order: LayerOrder::default(),
            series: Vec::new(),
        }
    }

    /// Describe the x axis (e.g. "Iterations")
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Describe the y axis (e.g. "Covered branches")
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn layer_order(mut self, order: LayerOrder) -> Self {
        self.layer_order = order;
        self
    }

    pub fn add_series(mut self, series: CoverageSeries) -> Self {
        self.series.push(series);
        self
    }

    pub fn add_all(mut self, series: impl IntoIterator<Item = CoverageSeries>) -> Self {
        self.series.extend(series);
        self
    }

    /// Finish the chart
    ///
    /// Fails with [`ChartError::InvalidInput`] when no series were added.
    pub fn build(self) -> Result<ComparisonChart, ChartError> {
        if self.series.is_empty() {
            return Err(ChartError::InvalidInput(
                "at least one coverage series is required".to_string(),
            ));
        }

        let mut traces: Vec<Trace> = self
            .series
            .into_iter()
            .enumerate()
            .map(|(index, series)| Trace {
                series,
                color: color_for(index),
            })
            .collect();

        if self.layer_order == LayerOrder::Reversed {
            traces.reverse();
        }

        Ok(ComparisonChart {
            title: self.title,
            x_label: self.x_label,
            y_label: self.y_label,
            traces,
        })
    }
}

/// Build a chart with one trace per series and default axis descriptions
pub fn build_comparison_chart(
    series: Vec<CoverageSeries>,
    title: &str,
    layer_order: LayerOrder,
) -> Result<ComparisonChart, ChartError> {
    ComparisonChartBuilder::new(title)
        .layer_order(layer_order)
        .add_all(series)
        .build()
}
