// File: crates/benchviz-core/src/legend.rs
// Summary: Automatic legend placement: the plot corner covering the fewest data points.

use crate::geometry::RectF;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendCorner {
    /// Candidate order; earlier corners win ties.
    pub const ALL: [LegendCorner; 4] = [
        LegendCorner::UpperRight,
        LegendCorner::UpperLeft,
        LegendCorner::LowerLeft,
        LegendCorner::LowerRight,
    ];

    fn rect(self, plot: RectF, w: f32, h: f32, margin: f32) -> RectF {
        let (l, t) = match self {
            LegendCorner::UpperRight => (plot.right - margin - w, plot.top + margin),
            LegendCorner::UpperLeft => (plot.left + margin, plot.top + margin),
            LegendCorner::LowerLeft => (plot.left + margin, plot.bottom - margin - h),
            LegendCorner::LowerRight => (plot.right - margin - w, plot.bottom - margin - h),
        };
        RectF::from_ltwh(l, t, w, h)
    }
}

/// Pick the corner of `plot` whose `w × h` box overlaps the fewest of `points`
/// (pixel coordinates).
pub fn place_legend(plot: RectF, w: f32, h: f32, margin: f32, points: &[(f32, f32)]) -> (LegendCorner, RectF) {
    let mut best = (LegendCorner::UpperRight, LegendCorner::UpperRight.rect(plot, w, h, margin));
    let mut best_hits = usize::MAX;
    for corner in LegendCorner::ALL {
        let rect = corner.rect(plot, w, h, margin);
        let hits = points.iter().filter(|&&(x, y)| rect.contains(x, y)).count();
        if hits < best_hits {
            best_hits = hits;
            best = (corner, rect);
        }
    }
    best
}
