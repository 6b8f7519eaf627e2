// File: crates/benchviz-core/src/view.rs
// Visible data ranges computed from the lines of one chart.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Tight bounds over all points with a 2% vertical margin. Degenerate spans
    /// are widened to 1.0; no points at all gives the unit square.
    pub fn from_points<'a>(lines: impl IntoIterator<Item = &'a [(f64, f64)]>) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for pts in lines {
            for &(x, y) in pts {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        let ym = (y_max - y_min) * 0.02;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    /// Pin the lower y bound (densities start at zero).
    pub fn with_y_floor(mut self, floor: f64) -> Self {
        self.y_min = floor;
        self
    }
}
