use std::io::Read;
use std::path::Path;

use log::debug;

use super::{CoverageSeries, Sample, SeriesError};

/// Column holding the test-progress metric
pub const X_COLUMN: &str = "x";

/// Column holding the coverage metric
pub const Y_COLUMN: &str = "y";

/// Options controlling how a coverage table is tokenized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter (comma for CSV, tab for TSV)
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl LoadOptions {
    /// Pick the delimiter from the file extension: tab for `.tsv`/`.tab`,
    /// comma otherwise
    pub fn for_path<P: AsRef<Path>>(path: P) -> Self {
        let is_tab_separated = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("tab"))
            .unwrap_or(false);

        if is_tab_separated {
            Self { delimiter: b'\t' }
        } else {
            Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Load a coverage series from a delimited text file
///
/// The file is read into memory in one pass and the handle is released
/// before parsing starts, so a parse failure never leaves the file open.
///
/// # Errors
///
/// * [`SeriesError::FileNotFound`] if the path is missing or unreadable
/// * [`SeriesError::MalformedInput`] if the header lacks `x`/`y`, a value
///   is not a finite number, or a row's width differs from the header's
pub fn load_series<P: AsRef<Path>>(
    path: P,
    label: impl Into<String>,
    options: &LoadOptions,
) -> Result<CoverageSeries, SeriesError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SeriesError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let origin = path.display().to_string();
    load_series_from_reader(bytes.as_slice(), label, &origin, options)
}

/// Parse a coverage series from any reader
///
/// `origin` names the source in error messages (usually the file path).
pub fn load_series_from_reader<R: Read>(
    reader: R,
    label: impl Into<String>,
    origin: &str,
    options: &LoadOptions,
) -> Result<CoverageSeries, SeriesError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| csv_error(origin, e))?
        .clone();

    let x_index = locate_column(&headers, X_COLUMN, origin)?;
    let y_index = locate_column(&headers, Y_COLUMN, origin)?;

    let mut samples = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| csv_error(origin, e))?;
        let line = record.position().map(|p| p.line());

        let x = parse_value(record.get(x_index), X_COLUMN, origin, line)?;
        let y = parse_value(record.get(y_index), Y_COLUMN, origin, line)?;
        samples.push(Sample { x, y });
    }

    let series = CoverageSeries::new(label, samples);
    debug!(
        "Loaded {} samples for '{}' from {}",
        series.len(),
        series.label(),
        origin
    );

    Ok(series)
}

fn locate_column(headers: &csv::StringRecord, name: &str, origin: &str) -> Result<usize, SeriesError> {
    let mut matches = headers
        .iter()
        .enumerate()
        .filter(|(_, header)| *header == name)
        .map(|(i, _)| i);

    let index = matches.next().ok_or_else(|| {
        SeriesError::malformed(
            origin,
            Some(1),
            format!("missing required column '{}'", name),
        )
    })?;

    if matches.next().is_some() {
        return Err(SeriesError::malformed(
            origin,
            Some(1),
            format!("column '{}' appears more than once", name),
        ));
    }

    Ok(index)
}

fn parse_value(
    field: Option<&str>,
    column: &str,
    origin: &str,
    line: Option<u64>,
) -> Result<f64, SeriesError> {
    let raw = field.unwrap_or("");
    if raw.is_empty() {
        return Err(SeriesError::malformed(
            origin,
            line,
            format!("empty value in column '{}'", column),
        ));
    }

    let value: f64 = raw.parse().map_err(|_| {
        SeriesError::malformed(
            origin,
            line,
            format!("value '{}' in column '{}' is not a number", raw, column),
        )
    })?;

    if !value.is_finite() {
        return Err(SeriesError::malformed(
            origin,
            line,
            format!("value '{}' in column '{}' is not finite", raw, column),
        ));
    }

    Ok(value)
}

fn csv_error(origin: &str, err: csv::Error) -> SeriesError {
    let line = err.position().map(|p| p.line());
    match err.into_kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => SeriesError::malformed(
            origin,
            pos.map(|p| p.line()).or(line),
            format!("expected {} columns as in the header, found {}", expected_len, len),
        ),
        csv::ErrorKind::Io(source) => SeriesError::FileNotFound {
            path: origin.into(),
            source,
        },
        other => SeriesError::malformed(origin, line, csv_kind_detail(&other)),
    }
}

fn csv_kind_detail(kind: &csv::ErrorKind) -> String {
    match kind {
        csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
        other => format!("{:?}", other),
    }
}
