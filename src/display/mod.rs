//! # Chart Display
//!
//! Renders a [`ComparisonChart`] with [`plotters`] and optionally hands the
//! result to the platform viewer.
//!
//! The backend is chosen from the output file extension:
//!
//! | Extension | Backend          | Notes                                   |
//! |-----------|------------------|-----------------------------------------|
//! | `.svg`    | `SVGBackend`     | Always available, no system fonts needed |
//! | `.png`    | `BitMapBackend`  | Requires the `png` feature               |
//!
//! Without a viewer the call returns as soon as the artifact is written.
//! With [`DisplayOptions::open_viewer`] it blocks until the viewer launcher
//! exits.

mod error;
mod viewer;

#[cfg(test)]
mod tests;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::{ComparisonChart, PlotGrid};

pub use error::DisplayError;
pub use viewer::open_in_viewer;

/// Artifact written when no output path is configured
pub const DEFAULT_OUTPUT: &str = "coverage_comparison.svg";

/// Default canvas size in pixels
pub const DEFAULT_SIZE: (u32, u32) = (1200, 800);

const TITLE_FONT_SIZE: f64 = 32.0;
const LABEL_FONT_SIZE: f64 = 18.0;
const LINE_WIDTH: u32 = 2;

/// Image format of the rendered artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Resolve the format from a path's extension
    ///
    /// Fails with [`DisplayError::UnsupportedFormat`] for unknown extensions
    /// and for PNG when the crate was built without the `png` feature.
    pub fn from_path(path: &Path) -> Result<Self, DisplayError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("svg") => Ok(OutputFormat::Svg),
            #[cfg(feature = "png")]
            Some("png") => Ok(OutputFormat::Png),
            #[cfg(not(feature = "png"))]
            Some("png") => Err(DisplayError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: "PNG output requires the `png` feature".to_string(),
            }),
            Some(other) => Err(DisplayError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: format!("unknown extension '.{}', expected .svg or .png", other),
            }),
            None => Err(DisplayError::UnsupportedFormat {
                path: path.to_path_buf(),
                reason: "missing file extension, expected .svg or .png".to_string(),
            }),
        }
    }
}

/// Where and how a chart is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Artifact path; its extension selects the backend
    pub output: PathBuf,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Open the artifact in the platform viewer after writing it
    pub open_viewer: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_SIZE.0,
            height: DEFAULT_SIZE.1,
            open_viewer: false,
        }
    }
}

impl DisplayOptions {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_viewer(mut self, open_viewer: bool) -> Self {
        self.open_viewer = open_viewer;
        self
    }
}

/// Render the chart and, if requested, show it in the platform viewer
///
/// Returns the path of the written artifact.
pub fn display(chart: &ComparisonChart, options: &DisplayOptions) -> Result<PathBuf, DisplayError> {
    let path = render(chart, options)?;

    if options.open_viewer {
        open_in_viewer(&path)?;
    }

    Ok(path)
}

/// Render the chart to the configured artifact without opening a viewer
///
/// A panic inside the plotting backend is returned as
/// [`DisplayError::Drawing`] carrying the panic message. The process panic
/// hook still runs first, so the default hook also prints that message to
/// stderr.
pub fn render(chart: &ComparisonChart, options: &DisplayOptions) -> Result<PathBuf, DisplayError> {
    let format = OutputFormat::from_path(&options.output)?;
    check_output_target(options)?;
    let grid = checked_grid(chart)?;

    let path = options.output.as_path();
    let size = (options.width, options.height);

    debug!(
        "Rendering '{}' ({} traces) as {:?} at {}x{}",
        chart.title(),
        chart.traces().len(),
        format,
        options.width,
        options.height
    );

    // Font and backend failures inside plotters can panic rather than
    // return an error.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| match format {
        OutputFormat::Svg => draw_chart(SVGBackend::new(path, size).into_drawing_area(), chart, &grid),
        #[cfg(feature = "png")]
        OutputFormat::Png => draw_chart(BitMapBackend::new(path, size).into_drawing_area(), chart, &grid),
        #[cfg(not(feature = "png"))]
        OutputFormat::Png => Err(DisplayError::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: "PNG output requires the `png` feature".to_string(),
        }),
    }));

    outcome.map_err(|payload| {
        DisplayError::Drawing(format!(
            "plotting backend panicked: {}",
            panic_message(payload.as_ref())
        ))
    })??;

    info!("Wrote chart to {}", path.display());
    Ok(path.to_path_buf())
}

/// The shared grid, provided both axes have a finite, non-zero span
fn checked_grid(chart: &ComparisonChart) -> Result<PlotGrid, DisplayError> {
    let grid = chart.grid();

    for (axis, range) in [("x", grid.x), ("y", grid.y)] {
        let span = range.span();
        if !span.is_finite() || span <= 0.0 {
            return Err(DisplayError::Drawing(format!(
                "{} axis range {} .. {} cannot be drawn",
                axis, range.min, range.max
            )));
        }
    }

    Ok(grid)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic payload"
    }
}

fn check_output_target(options: &DisplayOptions) -> Result<(), DisplayError> {
    if options.width == 0 || options.height == 0 {
        return Err(DisplayError::OutputUnavailable(format!(
            "canvas size {}x{} has no area",
            options.width, options.height
        )));
    }

    let parent = options
        .output
        .parent()
        .filter(|p| !p.as_os_str().is_empty());

    if let Some(parent) = parent {
        if !parent.is_dir() {
            return Err(DisplayError::OutputUnavailable(format!(
                "directory {} does not exist",
                parent.display()
            )));
        }
    }

    Ok(())
}

fn draw_chart<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    chart: &ComparisonChart,
    grid: &PlotGrid,
) -> Result<(), DisplayError> {
    root.fill(&WHITE).map_err(drawing_error)?;

    let mut plot = ChartBuilder::on(&root)
        .caption(chart.title(), ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(grid.x.min..grid.x.max, grid.y.min..grid.y.max)
        .map_err(drawing_error)?;

    plot.configure_mesh()
        .x_desc(chart.x_label())
        .y_desc(chart.y_label())
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()
        .map_err(drawing_error)?;

    // Later traces paint over earlier ones.
    for trace in chart.traces() {
        let c = trace.color();
        let color = RGBColor(c.r, c.g, c.b);

        plot.draw_series(LineSeries::new(
            trace.series().samples().iter().map(|s| (s.x, s.y)),
            color.stroke_width(LINE_WIDTH),
        ))
        .map_err(drawing_error)?
        .label(trace.name())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(LINE_WIDTH))
        });
    }

    plot.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", LABEL_FONT_SIZE))
        .position(SeriesLabelPosition::LowerRight)
        .draw()
        .map_err(drawing_error)?;

    root.present().map_err(drawing_error)?;
    Ok(())
}

fn drawing_error<E: std::fmt::Display>(err: E) -> DisplayError {
    DisplayError::Drawing(err.to_string())
}
