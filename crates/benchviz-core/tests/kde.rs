// File: crates/benchviz-core/tests/kde.rs
// Purpose: Kernel-density estimate: bandwidth rule, grid extent and normalization.

use benchviz_core::kde::{density_at, estimate, scott_bandwidth, CUT, GRID_SIZE};

#[test]
fn scott_bandwidth_uses_sample_std() {
    // sample std of [2, 4, 4, 4, 5, 5, 7, 9] is sqrt(32/7)
    let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let h = scott_bandwidth(&v).unwrap();
    let want = (32.0f64 / 7.0).sqrt() * 8f64.powf(-0.2);
    assert!((h - want).abs() < 1e-12, "h={h} want={want}");
}

#[test]
fn degenerate_inputs_have_no_bandwidth() {
    assert!(scott_bandwidth(&[]).is_none());
    assert!(scott_bandwidth(&[3.0]).is_none());
    assert!(scott_bandwidth(&[2.0, 2.0, 2.0]).is_none());
    assert!(estimate(&[2.0, 2.0]).is_none());
}

#[test]
fn grid_spans_data_plus_cut_bandwidths() {
    let v = [5.0, 3.0, 4.0];
    let h = scott_bandwidth(&v).unwrap();
    let curve = estimate(&v).unwrap();
    assert_eq!(curve.len(), GRID_SIZE);
    assert!((curve[0].0 - (3.0 - CUT * h)).abs() < 1e-9);
    assert!((curve[GRID_SIZE - 1].0 - (5.0 + CUT * h)).abs() < 1e-9);
    assert!(curve.iter().all(|&(_, d)| d >= 0.0 && d.is_finite()));
}

#[test]
fn density_integrates_to_about_one() {
    let v: Vec<f64> = (0..200).map(|i| ((i * 37) % 101) as f64 * 0.1).collect();
    let curve = estimate(&v).unwrap();
    let dx = curve[1].0 - curve[0].0;
    let area: f64 = curve.iter().map(|&(_, d)| d * dx).sum();
    assert!((area - 1.0).abs() < 0.01, "area={area}");
}

#[test]
fn density_peaks_near_the_cluster() {
    let v = [1.0, 1.1, 0.9, 1.05, 0.95, 10.0];
    let h = scott_bandwidth(&v).unwrap();
    assert!(density_at(&v, h, 1.0) > density_at(&v, h, 5.0));
}
