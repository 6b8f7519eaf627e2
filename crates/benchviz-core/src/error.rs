// File: crates/benchviz-core/src/error.rs
// Summary: Error taxonomy shared by the loader, aggregator and renderer.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file is empty or holds nothing but the header row.
    #[error("no data rows in {} (a header row is required, followed by at least one data row)", path.display())]
    EmptyFile { path: PathBuf },

    /// `line` is the 1-based line in the file (the header is line 1), `column` is 0-based.
    #[error("{}:{line}: column {column}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        column: usize,
        reason: String,
    },

    #[error("series '{label}' has {actual} values but {expected} keys were declared")]
    LengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("series label '{label}' appears more than once")]
    DuplicateLabel { label: String },

    #[error("unrecognized color '{0}'")]
    InvalidColor(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub(crate) fn render(msg: impl Into<String>) -> Self {
        Error::Render(msg.into())
    }
}
