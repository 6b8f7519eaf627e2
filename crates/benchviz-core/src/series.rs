// File: crates/benchviz-core/src/series.rs
// Summary: Sample and Series model for loaded benchmark measurements.
// Notes:
// - Samples keep input row order; nothing in the pipeline sorts them.
// - Label and color are caller metadata, never read from the file.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64, // 1-based row position or a loaded x column
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub color: skia::Color,
    pub style: LineStyle,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(label: impl Into<String>, color: skia::Color) -> Self {
        Self { label: label.into(), color, style: LineStyle::Solid, samples: Vec::new() }
    }

    /// Build from plain `(x, y)` pairs.
    pub fn with_data(label: impl Into<String>, color: skia::Color, data: Vec<(f64, f64)>) -> Self {
        let samples = data.into_iter().map(|(x, y)| Sample { x, y }).collect();
        Self { label: label.into(), color, style: LineStyle::Solid, samples }
    }

    /// Build from y values only; x is the 1-based position.
    pub fn from_values(label: impl Into<String>, color: skia::Color, values: &[f64]) -> Self {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, &y)| Sample { x: (i + 1) as f64, y })
            .collect();
        Self { label: label.into(), color, style: LineStyle::Solid, samples }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn ys(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y).collect()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.x, s.y)).collect()
    }
}
