// File: crates/benchviz-core/src/kde.rs
// Summary: Gaussian kernel-density estimate used by the density chart.

use std::f64::consts::PI;

/// Evaluation points per curve.
pub const GRID_SIZE: usize = 200;
/// How many bandwidths the curve extends past the data on each side.
pub const CUT: f64 = 3.0;

/// Scott's rule bandwidth: `std * n^(-1/5)` with the sample (n - 1) standard deviation.
/// `None` for fewer than two values or zero spread.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = var.sqrt();
    if !std.is_finite() || std <= 0.0 {
        return None;
    }
    Some(std * (n as f64).powf(-0.2))
}

/// Density at `x` for a Gaussian kernel of width `h`.
pub fn density_at(values: &[f64], h: f64, x: f64) -> f64 {
    let norm = 1.0 / (values.len() as f64 * h * (2.0 * PI).sqrt());
    values
        .iter()
        .map(|v| {
            let u = (x - v) / h;
            (-0.5 * u * u).exp()
        })
        .sum::<f64>()
        * norm
}

/// Evaluate the estimate on an even grid spanning the data plus `CUT` bandwidths.
/// Returns `(x, density)` pairs, or `None` when no bandwidth can be chosen.
pub fn estimate(values: &[f64]) -> Option<Vec<(f64, f64)>> {
    let h = scott_bandwidth(values)?;
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let grid = crate::grid::linspace(lo - CUT * h, hi + CUT * h, GRID_SIZE);
    Some(grid.into_iter().map(|x| (x, density_at(values, h, x))).collect())
}
