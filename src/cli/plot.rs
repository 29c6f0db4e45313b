use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use coverage_compare::comparison;

use super::config::{self, Config, Overrides};

/// Render the configured coverage series as one comparison chart
pub fn run(config_path: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    let file = config_path.as_deref().map(Config::from_file).transpose()?;
    let (settings, display) = config::resolve(file, overrides)?;

    info!("coverage-compare");
    info!("================");
    info!("Title:  {}", settings.title);
    for source in &settings.series {
        info!("Series: {} <- {}", source.label, source.path.display());
    }
    info!("Layers: {:?}", settings.layer_order);
    info!("Output: {}", display.output.display());

    let written = comparison::run(&settings, &display).with_context(|| {
        format!("Failed to produce comparison chart '{}'", settings.title)
    })?;

    println!("Chart written to {}", written.display());
    Ok(())
}
