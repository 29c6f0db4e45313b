use anyhow::{Context, Result};
use log::warn;
use std::path::PathBuf;

use coverage_compare::report::{InspectionReport, SeriesSummary};

use super::config::{self, Config, Overrides};

/// Load every configured series and print a summary instead of a chart
pub fn run(config_path: Option<PathBuf>, overrides: Overrides, json: bool) -> Result<()> {
    let file = config_path.as_deref().map(Config::from_file).transpose()?;
    let (comparison, _) = config::resolve(file, overrides)?;

    let mut report = InspectionReport::new(&comparison.title);
    for source in &comparison.series {
        let series = source
            .load()
            .with_context(|| format!("Failed to load series '{}'", source.label))?;
        report.add_entry(SeriesSummary::new(&series, source.path.display().to_string()));
    }

    for entry in report.empty_series() {
        warn!("Series '{}' has no samples", entry.label);
    }

    if json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else {
        #[cfg(feature = "colorized_output")]
        {
            print!("{}", report.format_colored());
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            print!("{}", report);
        }
    }

    Ok(())
}
