use super::*;
use crate::chart::{build_comparison_chart, LayerOrder};
use crate::error::ErrorKind;
use crate::series::{CoverageSeries, Sample};
use tempfile::tempdir;

fn sample_chart() -> ComparisonChart {
    let with = CoverageSeries::new(
        "With harness",
        vec![Sample::new(1.0, 10.0), Sample::new(2.0, 25.0), Sample::new(3.0, 40.0)],
    );
    let without = CoverageSeries::new(
        "Without harness",
        vec![Sample::new(1.0, 4.0), Sample::new(2.0, 9.0), Sample::new(3.0, 11.0)],
    );
    build_comparison_chart(vec![with, without], "Memcached coverage", LayerOrder::AsGiven).unwrap()
}

#[test]
fn test_output_format_from_path() {
    assert_eq!(
        OutputFormat::from_path(Path::new("chart.svg")).unwrap(),
        OutputFormat::Svg
    );
    assert_eq!(
        OutputFormat::from_path(Path::new("CHART.SVG")).unwrap(),
        OutputFormat::Svg
    );

    let err = OutputFormat::from_path(Path::new("chart.pdf")).unwrap_err();
    assert!(matches!(err, DisplayError::UnsupportedFormat { .. }));
    assert_eq!(err.kind(), ErrorKind::DisplayError);

    assert!(OutputFormat::from_path(Path::new("chart")).is_err());
}

#[cfg(not(feature = "png"))]
#[test]
fn test_png_requires_feature() {
    let err = OutputFormat::from_path(Path::new("chart.png")).unwrap_err();
    assert!(err.to_string().contains("png"));
}

#[test]
fn test_missing_output_directory() {
    let dir = tempdir().unwrap();
    let options = DisplayOptions::new(dir.path().join("missing").join("chart.svg"));

    let err = display(&sample_chart(), &options).unwrap_err();
    assert!(matches!(err, DisplayError::OutputUnavailable(_)));
    assert!(!options.output.exists());
}

#[test]
fn test_zero_sized_canvas_rejected() {
    let dir = tempdir().unwrap();
    let options = DisplayOptions::new(dir.path().join("chart.svg")).with_size(0, 600);

    let err = render(&sample_chart(), &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayError);
}

#[test]
fn test_default_options() {
    let options = DisplayOptions::default();
    assert_eq!(options.output, PathBuf::from(DEFAULT_OUTPUT));
    assert_eq!((options.width, options.height), DEFAULT_SIZE);
    assert!(!options.open_viewer);
}

#[test]
fn test_render_svg_contains_title_and_legend() {
    let dir = tempdir().unwrap();
    let options = DisplayOptions::new(dir.path().join("comparison.svg")).with_size(800, 600);

    let written = display(&sample_chart(), &options).unwrap();
    assert_eq!(written, options.output);

    let svg = std::fs::read_to_string(&written).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Memcached coverage"));
    assert!(svg.contains("With harness"));
    assert!(svg.contains("Without harness"));
}

#[test]
fn test_render_svg_empty_series() {
    let dir = tempdir().unwrap();
    let chart = build_comparison_chart(
        vec![CoverageSeries::new("Empty run", Vec::new())],
        "Nothing covered yet",
        LayerOrder::AsGiven,
    )
    .unwrap();

    let written = render(&chart, &DisplayOptions::new(dir.path().join("empty.svg"))).unwrap();
    assert!(written.exists());
}

#[test]
fn test_unbounded_axis_span_rejected() {
    let dir = tempdir().unwrap();

    for samples in [
        vec![Sample::new(0.0, -1e308), Sample::new(1.0, 1e308)],
        vec![Sample::new(-1e308, 0.0), Sample::new(1e308, 1.0)],
        vec![Sample::new(f64::MAX, 1.0)],
    ] {
        let chart = build_comparison_chart(
            vec![CoverageSeries::new("Extreme", samples)],
            "Overflow",
            LayerOrder::AsGiven,
        )
        .unwrap();
        let options = DisplayOptions::new(dir.path().join("overflow.svg"));

        let err = render(&chart, &options).unwrap_err();
        assert!(matches!(err, DisplayError::Drawing(_)));
        assert!(err.to_string().contains("axis range"));
        assert!(!options.output.exists());
    }
}

#[test]
fn test_wide_but_finite_span_renders() {
    let dir = tempdir().unwrap();
    let chart = build_comparison_chart(
        vec![CoverageSeries::new(
            "Wide",
            vec![Sample::new(0.0, -1e200), Sample::new(1.0, 1e200)],
        )],
        "Wide",
        LayerOrder::AsGiven,
    )
    .unwrap();

    let written = render(&chart, &DisplayOptions::new(dir.path().join("wide.svg"))).unwrap();
    assert!(written.exists());
}

#[test]
fn test_panic_message_extracted() {
    let payload = panic::catch_unwind(|| panic!("font missing")).unwrap_err();
    assert_eq!(panic_message(payload.as_ref()), "font missing");

    let payload = panic::catch_unwind(|| panic!("{} missing", "glyph")).unwrap_err();
    assert_eq!(panic_message(payload.as_ref()), "glyph missing");

    let payload = panic::catch_unwind(|| std::panic::panic_any(7u8)).unwrap_err();
    assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
}

#[cfg(feature = "png")]
#[test]
#[ignore = "Font rendering not available in test environment"]
fn test_render_png() {
    let dir = tempdir().unwrap();
    let options = DisplayOptions::new(dir.path().join("comparison.png"));

    let written = render(&sample_chart(), &options).unwrap();
    assert!(written.exists());
}
