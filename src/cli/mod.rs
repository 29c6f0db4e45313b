use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use coverage_compare::chart::LayerOrder;

mod config;
mod inspect;
mod plot;

/// coverage-compare - overlay coverage runs on one chart
#[derive(Parser)]
#[command(name = "coverage-compare")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Draw order of the traces.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum LayerOrderArg {
    /// First series at the bottom, last series on top
    #[default]
    AsGiven,
    /// Last series at the bottom, first series on top
    Reversed,
}

impl From<LayerOrderArg> for LayerOrder {
    fn from(arg: LayerOrderArg) -> Self {
        match arg {
            LayerOrderArg::AsGiven => LayerOrder::AsGiven,
            LayerOrderArg::Reversed => LayerOrder::Reversed,
        }
    }
}

/// Inputs shared by every command
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Load the comparison from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Chart title
    #[arg(short, long)]
    title: Option<String>,

    /// Coverage table to plot, as LABEL=PATH (repeat for each run, in order)
    #[arg(short, long = "series", value_name = "LABEL=PATH", value_parser = parse_series)]
    series: Vec<(String, PathBuf)>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render coverage tables as overlaid traces on one chart
    Plot {
        #[command(flatten)]
        sources: SourceArgs,

        /// Trace draw order
        #[arg(long, value_enum)]
        layer_order: Option<LayerOrderArg>,

        /// X axis description
        #[arg(long)]
        x_label: Option<String>,

        /// Y axis description
        #[arg(long)]
        y_label: Option<String>,

        /// Output image (.svg, or .png with the png feature)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Canvas width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Open the chart in the default viewer and wait for it
        #[arg(long)]
        open: bool,
    },

    /// Load coverage tables and summarize them without plotting
    Inspect {
        #[command(flatten)]
        sources: SourceArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Plot {
            sources,
            layer_order,
            x_label,
            y_label,
            output,
            width,
            height,
            open,
        } => {
            let overrides = config::Overrides {
                title: sources.title,
                series: sources.series,
                layer_order: layer_order.map(LayerOrder::from),
                x_label,
                y_label,
                output,
                width,
                height,
                open,
            };
            plot::run(sources.config, overrides)
        }
        Commands::Inspect { sources, json } => {
            let overrides = config::Overrides {
                title: sources.title,
                series: sources.series,
                ..Default::default()
            };
            inspect::run(sources.config, overrides, json)
        }
    }
}

fn parse_series(value: &str) -> std::result::Result<(String, PathBuf), String> {
    let (label, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=PATH, got '{}'", value))?;

    let label = label.trim();
    if label.is_empty() {
        return Err("series label must not be empty".to_string());
    }
    if path.is_empty() {
        return Err(format!("series '{}' has no path", label));
    }

    Ok((label.to_string(), PathBuf::from(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_series() {
        assert_eq!(
            parse_series("With harness=runs/with.csv").unwrap(),
            ("With harness".to_string(), PathBuf::from("runs/with.csv"))
        );
        assert_eq!(
            parse_series("A=dir/a=b.csv").unwrap().1,
            PathBuf::from("dir/a=b.csv")
        );
        assert!(parse_series("no-separator").is_err());
        assert!(parse_series("=path.csv").is_err());
        assert!(parse_series("label=").is_err());
    }

    #[test]
    fn test_cli_parses_plot() {
        let cli = Cli::try_parse_from([
            "coverage-compare",
            "-v",
            "plot",
            "--title",
            "Memcached coverage",
            "--series",
            "With harness=with.csv",
            "--series",
            "Without harness=without.csv",
            "--layer-order",
            "reversed",
            "-o",
            "chart.svg",
        ])
        .unwrap();

        assert_eq!(cli.verbosity(), 1);
        match cli.command {
            Commands::Plot {
                sources,
                layer_order,
                output,
                open,
                ..
            } => {
                assert_eq!(sources.series.len(), 2);
                assert_eq!(sources.series[1].0, "Without harness");
                assert!(matches!(layer_order, Some(LayerOrderArg::Reversed)));
                assert_eq!(output, Some(PathBuf::from("chart.svg")));
                assert!(!open);
            }
            Commands::Inspect { .. } => panic!("expected plot command"),
        }
    }
}
