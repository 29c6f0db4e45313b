//! Human-readable and JSON summaries of loaded series.
//!
//! Used by `coverage-compare inspect` to check what a comparison would plot
//! without rendering anything: one entry per series with its sample count
//! and the extent of each axis.

use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;
use serde::Serialize;

use crate::chart::AxisRange;
use crate::series::CoverageSeries;

/// Summary of one loaded series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub label: String,
    /// Where the series was loaded from
    pub origin: String,
    pub samples: usize,
    pub x_range: Option<AxisRange>,
    pub y_range: Option<AxisRange>,
}

impl SeriesSummary {
    pub fn new(series: &CoverageSeries, origin: impl Into<String>) -> Self {
        let to_range = |(min, max): (f64, f64)| AxisRange { min, max };
        Self {
            label: series.label().to_string(),
            origin: origin.into(),
            samples: series.len(),
            x_range: series.x_extent().map(to_range),
            y_range: series.y_extent().map(to_range),
        }
    }
}

/// Summaries of every series of a comparison, in configuration order
#[derive(Debug, Default, Serialize)]
pub struct InspectionReport {
    pub title: String,
    pub entries: Vec<SeriesSummary>,
}

impl InspectionReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: SeriesSummary) {
        self.entries.push(entry);
    }

    pub fn total_samples(&self) -> usize {
        self.entries.iter().map(|e| e.samples).sum()
    }

    /// Entries whose table had a header but no data rows
    pub fn empty_series(&self) -> impl Iterator<Item = &SeriesSummary> {
        self.entries.iter().filter(|e| e.samples == 0)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            output.push_str(&format!("{}\n", style("Coverage Series Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("======================").cyan()));
            output.push_str(&format!("{}: {}\n\n", style("Title").bold(), self.title));

            for entry in &self.entries {
                let count = if entry.samples == 0 {
                    style(entry.samples).yellow()
                } else {
                    style(entry.samples).green()
                };
                output.push_str(&format!(
                    "{} ({})\n  samples: {}\n  x: {}\n  y: {}\n",
                    style(&entry.label).bold(),
                    entry.origin,
                    count,
                    format_range(entry.x_range),
                    format_range(entry.y_range)
                ));
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} series, {} samples\n",
                style("Summary").bold(),
                self.entries.len(),
                self.total_samples()
            ));

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for InspectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Coverage Series Report")?;
        writeln!(f, "======================")?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f)?;

        for entry in &self.entries {
            writeln!(f, "{} ({})", entry.label, entry.origin)?;
            writeln!(f, "  samples: {}", entry.samples)?;
            writeln!(f, "  x: {}", format_range(entry.x_range))?;
            writeln!(f, "  y: {}", format_range(entry.y_range))?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} series, {} samples",
            self.entries.len(),
            self.total_samples()
        )
    }
}

fn format_range(range: Option<AxisRange>) -> String {
    match range {
        Some(r) => format!("{} .. {}", r.min, r.max),
        None => "-".to_string(),
    }
}
