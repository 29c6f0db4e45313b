//! TOML configuration file support.
//!
//! Instead of passing every series on the command line, a comparison can be
//! described in a config file:
//!
//! ```toml
//! # compare.toml
//! [comparison]
//! title = "Memcached coverage"
//! layer_order = "reversed"
//! x_label = "Iterations"
//! y_label = "Covered branches"
//!
//! [[comparison.series]]
//! label = "With harness"
//! path = "with/memcached_coverage.txt"
//!
//! [[comparison.series]]
//! label = "Without harness"
//! path = "without/memcached_coverage.txt"
//!
//! [output]
//! path = "coverage.svg"
//! width = 1200
//! height = 800
//! open = false
//! ```
//!
//! Relative series and output paths are resolved against the directory of
//! the config file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use coverage_compare::chart::LayerOrder;
use coverage_compare::comparison::{ComparisonConfig, SeriesSource};
use coverage_compare::display::DisplayOptions;

/// Root configuration structure for comparison TOML files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// What to compare.
    #[serde(default)]
    pub comparison: ComparisonSection,

    /// Where the chart goes.
    #[serde(default)]
    pub output: OutputSection,
}

/// Chart contents.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonSection {
    /// Chart title.
    pub title: Option<String>,

    /// Draw order of the traces.
    pub layer_order: Option<LayerOrder>,

    /// X axis description.
    pub x_label: Option<String>,

    /// Y axis description.
    pub y_label: Option<String>,

    /// Input tables, in the order they are passed to the chart.
    #[serde(default)]
    pub series: Vec<SeriesEntry>,
}

/// One input table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesEntry {
    pub label: String,
    pub path: PathBuf,
    /// Single-character field delimiter (defaults from the extension).
    pub delimiter: Option<char>,
}

/// Rendering settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Artifact path (.svg or .png).
    pub path: Option<PathBuf>,

    /// Canvas width in pixels.
    pub width: Option<u32>,

    /// Canvas height in pixels.
    pub height: Option<u32>,

    /// Open the artifact in the platform viewer.
    pub open: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config = Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for entry in &mut self.comparison.series {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
        }
        if let Some(output) = self.output.path.as_mut() {
            if output.is_relative() {
                *output = base.join(&*output);
            }
        }
    }
}

/// Command-line values layered over the config file
#[derive(Debug, Default)]
pub struct Overrides {
    pub title: Option<String>,
    /// Replaces the file's series list when non-empty
    pub series: Vec<(String, PathBuf)>,
    pub layer_order: Option<LayerOrder>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub output: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub open: bool,
}

/// Merge the config file (if any) with command-line overrides
///
/// Command-line values win. Title and series have no defaults; a missing
/// one is reported by [`ComparisonConfig::validate`].
pub fn resolve(file: Option<Config>, overrides: Overrides) -> Result<(ComparisonConfig, DisplayOptions)> {
    let file = file.unwrap_or_default();
    let section = file.comparison;

    let series: Vec<SeriesSource> = if overrides.series.is_empty() {
        section
            .series
            .into_iter()
            .map(|entry| SeriesSource {
                label: entry.label,
                path: entry.path,
                delimiter: entry.delimiter,
            })
            .collect()
    } else {
        overrides
            .series
            .into_iter()
            .map(|(label, path)| SeriesSource::new(label, path))
            .collect()
    };

    let comparison = ComparisonConfig {
        title: overrides.title.or(section.title).unwrap_or_default(),
        series,
        layer_order: overrides.layer_order.or(section.layer_order).unwrap_or_default(),
        x_label: overrides.x_label.or(section.x_label),
        y_label: overrides.y_label.or(section.y_label),
    };

    comparison
        .validate()
        .context("Incomplete comparison: provide --title and at least one --series, or a --config file")?;

    let defaults = DisplayOptions::default();
    let display = DisplayOptions {
        output: overrides.output.or(file.output.path).unwrap_or(defaults.output),
        width: overrides.width.or(file.output.width).unwrap_or(defaults.width),
        height: overrides.height.or(file.output.height).unwrap_or(defaults.height),
        open_viewer: overrides.open || file.output.open.unwrap_or(false),
    };

    Ok((comparison, display))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        [comparison]
        title = "Memcached coverage"
        layer_order = "reversed"
        x_label = "Iterations"

        [[comparison.series]]
        label = "With harness"
        path = "with/coverage.txt"

        [[comparison.series]]
        label = "Without harness"
        path = "/abs/without.tsv"
        delimiter = "\t"

        [output]
        path = "out.svg"
        width = 640
        open = true
    "#;

    #[test]
    fn test_parse_config() {
        let config = Config::from_str(FULL).unwrap();
        assert_eq!(config.comparison.title.as_deref(), Some("Memcached coverage"));
        assert_eq!(config.comparison.layer_order, Some(LayerOrder::Reversed));
        assert_eq!(config.comparison.series.len(), 2);
        assert_eq!(config.comparison.series[1].delimiter, Some('\t'));
        assert_eq!(config.output.width, Some(640));
        assert_eq!(config.output.height, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert!(config.comparison.title.is_none());
        assert!(config.comparison.series.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_str("[comparison]\ntitel = \"typo\"\n").is_err());
    }

    #[test]
    fn test_relative_paths_resolved() {
        let mut config = Config::from_str(FULL).unwrap();
        config.resolve_relative_to(Path::new("/runs"));

        assert_eq!(
            config.comparison.series[0].path,
            PathBuf::from("/runs/with/coverage.txt")
        );
        assert_eq!(config.comparison.series[1].path, PathBuf::from("/abs/without.tsv"));
        assert_eq!(config.output.path, Some(PathBuf::from("/runs/out.svg")));
    }

    #[test]
    fn test_resolve_from_file_only() {
        let (comparison, display) = resolve(Some(Config::from_str(FULL).unwrap()), Overrides::default()).unwrap();

        assert_eq!(comparison.title, "Memcached coverage");
        assert_eq!(comparison.layer_order, LayerOrder::Reversed);
        assert_eq!(comparison.x_label.as_deref(), Some("Iterations"));
        assert_eq!(comparison.y_label, None);
        assert_eq!(display.width, 640);
        assert_eq!(display.height, DisplayOptions::default().height);
        assert!(display.open_viewer);
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            title: Some("CLI title".to_string()),
            series: vec![("Only".to_string(), PathBuf::from("only.csv"))],
            layer_order: Some(LayerOrder::AsGiven),
            output: Some(PathBuf::from("cli.svg")),
            ..Default::default()
        };

        let (comparison, display) = resolve(Some(Config::from_str(FULL).unwrap()), overrides).unwrap();
        assert_eq!(comparison.title, "CLI title");
        assert_eq!(comparison.series, vec![SeriesSource::new("Only", "only.csv")]);
        assert_eq!(comparison.layer_order, LayerOrder::AsGiven);
        assert_eq!(display.output, PathBuf::from("cli.svg"));
    }

    #[test]
    fn test_missing_title_or_series_rejected() {
        let overrides = Overrides {
            series: vec![("A".to_string(), PathBuf::from("a.csv"))],
            ..Default::default()
        };
        assert!(resolve(None, overrides).is_err());

        let overrides = Overrides {
            title: Some("T".to_string()),
            ..Default::default()
        };
        assert!(resolve(None, overrides).is_err());
    }
}
