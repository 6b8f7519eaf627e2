// File: crates/benchviz-core/tests/snapshot.rs
// Purpose: Golden snapshots for the three chart kinds, with bless flow.
// Behavior:
// - Renders deterministic small charts to PNG bytes with labels disabled.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns without failing to ease first run.

use benchviz_core::{
    parse_color, render_to_png_bytes, ChartSpec, Dataset, Figure, Keys, LineStyle, RenderOptions, Series,
};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn latency_pair() -> Vec<Series> {
    let a = [5.0, 3.0, 4.0, 4.5, 3.8, 5.2, 4.1, 3.9];
    let b = [2.0, 2.5, 2.2, 2.8, 2.1, 2.4];
    vec![
        Series::from_values("std", parse_color("green").unwrap(), &a).with_style(LineStyle::Dashed),
        Series::from_values("nkt", parse_color("blue").unwrap(), &b).with_style(LineStyle::Dashed),
    ]
}

fn render(spec: &ChartSpec<'_>) -> Vec<u8> {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let mut figure = Figure::new(800, 500).expect("figure");
    render_to_png_bytes(&mut figure, spec, &opts).expect("render bytes")
}

#[test]
fn golden_overlay_line() {
    let series = latency_pair();
    write_or_compare("overlay_line.png", &render(&ChartSpec::overlay_line(&series, "unused.png")));
}

#[test]
fn golden_overlay_density() {
    let series = latency_pair();
    write_or_compare("overlay_density.png", &render(&ChartSpec::overlay_density(&series, "unused.png")));
}

#[test]
fn golden_capacity_sweep() {
    let caps = vec![4.0, 1024.0, 4096.0, 8192.0, 16384.0, 32768.0];
    let series: Vec<Series> = ["spin", "pipe", "chan", "cond"]
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let ys: Vec<f64> = caps.iter().map(|c: &f64| 10.0 + c.log2() * (i + 1) as f64).collect();
            Series::from_values(*l, parse_color("k").unwrap(), &ys)
        })
        .collect();
    let ds = Dataset::aggregate(series, Keys::Declared(caps), "cap", "time").unwrap();
    write_or_compare("capacity_sweep.png", &render(&ChartSpec::relational(&ds, "unused.png")));
}
