//! # coverage-compare
//!
//! A command-line tool that overlays coverage-over-time tables from several
//! test runs on one chart.
//!
//! ## Usage
//!
//! ```bash
//! # Compare two runs given on the command line
//! coverage-compare plot --title "Memcached coverage" \
//!     --series "With harness=with/memcached_coverage.txt" \
//!     --series "Without harness=without/memcached_coverage.txt" \
//!     --output coverage.svg --open
//!
//! # Same comparison described in a TOML file
//! coverage-compare plot --config compare.toml
//!
//! # Check what would be plotted
//! coverage-compare inspect --config compare.toml
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
