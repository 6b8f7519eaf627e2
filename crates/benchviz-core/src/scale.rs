// File: crates/benchviz-core/src/scale.rs
// Summary: Value-to-pixel transforms for linear and log10 axes.

use crate::axis::{Axis, ScaleKind};

/// Maps an axis range onto a pixel span. `start_px` receives `axis.min`, so a
/// vertical scale is built with `start_px = bottom` and `end_px = top`.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_px: f32,
    pub end_px: f32,
    lo: f64,
    hi: f64,
    log: bool,
}

impl AxisScale {
    pub fn new(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => {
                let mut hi = axis.max;
                if (hi - axis.min).abs() < 1e-12 { hi = axis.min + 1.0; }
                Self { start_px, end_px, lo: axis.min, hi, log: false }
            }
            ScaleKind::Log10 => {
                // Ensure strictly positive range for log scale
                let eps = 1e-12;
                let vmin = if axis.min <= eps { eps } else { axis.min };
                let vmax = if axis.max <= vmin { vmin * 10.0 } else { axis.max };
                Self { start_px, end_px, lo: vmin.log10(), hi: vmax.log10(), log: true }
            }
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let v = if self.log { v.max(1e-12).log10() } else { v };
        let span = (self.hi - self.lo).max(1e-12);
        self.start_px + ((v - self.lo) / span) as f32 * (self.end_px - self.start_px)
    }
}
