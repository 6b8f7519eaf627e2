// File: crates/benchviz-core/src/chart_spec.rs
// Summary: Declarative description of one rendering request.

use std::path::PathBuf;

use crate::dataset::Dataset;
use crate::series::Series;
use crate::types::FigureSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// One line per series over a shared canvas.
    OverlayLine,
    /// One filled kernel-density curve per series.
    OverlayDensity,
    /// One hue-colored line per label against the shared key axis.
    Relational,
}

impl ChartKind {
    pub fn default_size(&self) -> FigureSize {
        match self {
            ChartKind::OverlayLine | ChartKind::OverlayDensity => FigureSize::OVERLAY,
            ChartKind::Relational => FigureSize::RELATIONAL,
        }
    }
}

/// Chart input, borrowed so the line and density charts can share one load.
#[derive(Clone, Copy, Debug)]
pub enum ChartInput<'a> {
    Series(&'a [Series]),
    Table(&'a Dataset),
}

#[derive(Clone, Debug)]
pub struct ChartSpec<'a> {
    pub kind: ChartKind,
    pub input: ChartInput<'a>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub output: PathBuf,
    /// Falls back to `kind.default_size()`.
    pub size: Option<FigureSize>,
}

impl<'a> ChartSpec<'a> {
    pub fn new(kind: ChartKind, input: ChartInput<'a>, output: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            input,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            output: output.into(),
            size: None,
        }
    }

    pub fn overlay_line(series: &'a [Series], output: impl Into<PathBuf>) -> Self {
        Self::new(ChartKind::OverlayLine, ChartInput::Series(series), output)
    }

    pub fn overlay_density(series: &'a [Series], output: impl Into<PathBuf>) -> Self {
        Self::new(ChartKind::OverlayDensity, ChartInput::Series(series), output)
    }

    /// Relational chart; axis titles default to the dataset's column names.
    pub fn relational(table: &'a Dataset, output: impl Into<PathBuf>) -> Self {
        let mut spec = Self::new(ChartKind::Relational, ChartInput::Table(table), output);
        spec.x_label = table.key_name.clone();
        spec.y_label = table.value_name.clone();
        spec
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn with_size(mut self, size: FigureSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn figure_size(&self) -> FigureSize {
        self.size.unwrap_or_else(|| self.kind.default_size())
    }
}
