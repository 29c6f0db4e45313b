#![no_main]

use coverage_compare::chart::{build_comparison_chart, LayerOrder};
use coverage_compare::series::{load_series_from_reader, LoadOptions};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either load or fail with an error, never panic.
    for delimiter in [b',', b'\t'] {
        let options = LoadOptions::default().with_delimiter(delimiter);
        if let Ok(series) = load_series_from_reader(Cursor::new(data), "fuzz", "<fuzz>", &options) {
            // Every loaded sample is finite, so the grid must be well formed.
            let chart = build_comparison_chart(vec![series], "fuzz", LayerOrder::AsGiven)
                .expect("a single series always builds");
            let grid = chart.grid();
            assert!(grid.x.min < grid.x.max);
            assert!(grid.y.min < grid.y.max);
        }
    }
});
