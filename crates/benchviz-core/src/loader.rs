// File: crates/benchviz-core/src/loader.rs
// Summary: Series loader. Reads one comma-separated file (header + numeric rows) into a Series.

use std::path::Path;

use skia_safe as skia;

use crate::error::{Error, Result};
use crate::series::{LineStyle, Sample, Series};

/// Which columns feed the series. No default; every call site states its mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnMap {
    /// y from column `y`, x is the 1-based data row index.
    Indexed { y: usize },
    /// x and y both read from the file.
    Paired { x: usize, y: usize },
}

/// Caller-supplied series metadata.
#[derive(Clone, Debug)]
pub struct SeriesMeta {
    pub label: String,
    pub color: skia::Color,
    pub style: LineStyle,
}

impl SeriesMeta {
    pub fn new(label: impl Into<String>, color: skia::Color) -> Self {
        Self { label: label.into(), color, style: LineStyle::Solid }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

/// Load `path` into a Series. Row 1 is always the header and is skipped
/// without validation.
pub fn load_series(path: impl AsRef<Path>, columns: ColumnMap, meta: SeriesMeta) -> Result<Series> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound { path: path.to_path_buf() });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    // Header bytes are never decoded; an empty file has no header either.
    let header_len = rdr.byte_headers().map_err(|e| csv_error(path, e))?.len();
    if header_len == 0 {
        return Err(Error::EmptyFile { path: path.to_path_buf() });
    }

    let mut samples = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| csv_error(path, e))?;
        let line = rec.position().map(|p| p.line()).unwrap_or(i as u64 + 2);
        let field = |column: usize| parse_field(path, line, column, rec.get(column));
        let sample = match columns {
            ColumnMap::Indexed { y } => Sample { x: (i + 1) as f64, y: field(y)? },
            ColumnMap::Paired { x, y } => Sample { x: field(x)?, y: field(y)? },
        };
        samples.push(sample);
    }

    if samples.is_empty() {
        return Err(Error::EmptyFile { path: path.to_path_buf() });
    }
    log::debug!("loaded {} rows from {} as '{}'", samples.len(), path.display(), meta.label);

    Ok(Series { label: meta.label, color: meta.color, style: meta.style, samples })
}

fn parse_field(path: &Path, line: u64, column: usize, raw: Option<&str>) -> Result<f64> {
    let err = |reason: String| Error::Parse { path: path.to_path_buf(), line, column, reason };
    let raw = raw.ok_or_else(|| err("missing field".to_string()))?;
    let value = raw
        .parse::<f64>()
        .map_err(|_| err(format!("'{raw}' is not a number")))?;
    if !value.is_finite() {
        return Err(err(format!("'{raw}' is not a finite number")));
    }
    Ok(value)
}

fn csv_error(path: &Path, e: csv::Error) -> Error {
    let line = e.position().map(|p| p.line()).unwrap_or(0);
    match e.into_kind() {
        csv::ErrorKind::Io(source) => Error::io(path, source),
        csv::ErrorKind::Utf8 { err, .. } => Error::Parse {
            path: path.to_path_buf(),
            line,
            column: err.field(),
            reason: "invalid UTF-8".to_string(),
        },
        other => Error::Parse {
            path: path.to_path_buf(),
            line,
            column: 0,
            reason: format!("{other:?}"),
        },
    }
}
