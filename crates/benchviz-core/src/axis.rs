// File: crates/benchviz-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and optional fixed ticks.

use crate::grid::nice_ticks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Explicit tick positions; `None` picks nice linear steps.
    pub ticks: Option<Vec<f64>>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, ticks: None }
    }

    pub fn log10(mut self) -> Self {
        self.kind = ScaleKind::Log10;
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    /// Tick positions inside the axis range.
    pub fn tick_values(&self, target: usize) -> Vec<f64> {
        match &self.ticks {
            Some(t) => t.iter().copied().filter(|v| *v >= self.min && *v <= self.max).collect(),
            None => match self.kind {
                ScaleKind::Linear => nice_ticks(self.min, self.max, target),
                ScaleKind::Log10 => {
                    let lo = self.min.max(1e-12).log10().ceil() as i32;
                    let hi = self.max.max(1e-12).log10().floor() as i32;
                    (lo..=hi).map(|p| 10f64.powi(p)).collect()
                }
            },
        }
    }
}
