// File: crates/benchviz-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for long XY series.

/// Returns up to `threshold` points of `points`, keeping first and last and,
/// per bucket, the point spanning the largest triangle with its neighbours.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold < 3 { return vec![points[0], points[n - 1]][..threshold].to_vec(); }

    let every = (n - 2) as f64 / (threshold - 2) as f64;
    let bucket = |i: usize| -> (usize, usize) {
        let start = (1.0 + i as f64 * every).floor() as usize;
        let end = ((1.0 + (i + 1) as f64 * every).floor() as usize).min(n - 1);
        (start, end.max(start + 1))
    };

    let mut out = Vec::with_capacity(threshold);
    out.push(points[0]);
    let mut prev = points[0];

    for i in 0..threshold - 2 {
        let (start, end) = bucket(i);
        // average of the following bucket (or the last point for the final bucket)
        let (avg_x, avg_y) = if i + 1 < threshold - 2 {
            let (ns, ne) = bucket(i + 1);
            let cnt = (ne - ns) as f64;
            let (sx, sy) = points[ns..ne].iter().fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
            (sx / cnt, sy / cnt)
        } else {
            points[n - 1]
        };

        let area = |&(x, y): &(f64, f64)| ((prev.0 - avg_x) * (y - prev.1) - (prev.0 - x) * (avg_y - prev.1)).abs();
        let mut best = points[start];
        let mut best_area = -1.0;
        for p in &points[start..end] {
            let a = area(p);
            if a > best_area {
                best_area = a;
                best = *p;
            }
        }
        out.push(best);
        prev = best;
    }

    out.push(points[n - 1]);
    out
}
