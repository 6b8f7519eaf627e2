// File: crates/benchviz/tests/cli.rs
// Purpose: Drive the benchviz binary end to end against temp CSV fixtures.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, body).expect("write fixture");
    path
}

fn benchviz(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_benchviz"))
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .args(args)
        .output()
        .expect("spawn benchviz")
}

fn dims(path: &Path) -> (u32, u32) {
    let img = image::open(path).expect("decode png");
    (img.width(), img.height())
}

#[test]
fn overlay_writes_line_and_density_charts() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "benchmark_std.csv", "time\n5.0\n3.0\n4.0\n6.5\n");
    write(dir.path(), "benchmark_nkt.csv", "time\n2.0\n2.5\n2.2\n");

    let out = benchviz(
        dir.path(),
        &[
            "overlay",
            "--series", "benchmark_std.csv:std:green",
            "--series", "benchmark_nkt.csv:nkt:blue",
            "--y-col", "0",
        ],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Wrote chart_line.png"), "stdout: {stdout}");
    assert!(stdout.contains("Wrote chart_sns.png"), "stdout: {stdout}");
    assert_eq!(dims(&dir.path().join("chart_line.png")), (800, 500));
    assert_eq!(dims(&dir.path().join("chart_sns.png")), (800, 500));
}

#[test]
fn missing_input_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = benchviz(
        dir.path(),
        &["overlay", "--series", "nope.csv:std:green", "--y-col", "0"],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("nope.csv"), "stderr: {stderr}");
    assert!(!dir.path().join("chart_line.png").exists());
}

#[test]
fn unknown_color_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.csv", "time\n1.0\n2.0\n");
    let out = benchviz(dir.path(), &["overlay", "--series", "a.csv:a:notacolor", "--y-col", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("notacolor"));
}

#[test]
fn sweep_renders_declared_keys() {
    let dir = tempfile::tempdir().unwrap();
    let caps = [4, 1024, 4096, 8192, 16384, 32768];
    for (i, name) in ["spin", "pipe", "chan", "cond"].iter().enumerate() {
        let mut body = String::from("cap,time\n");
        for c in caps {
            body.push_str(&format!("{c},{}\n", (c as f64).sqrt() * (i + 1) as f64));
        }
        write(dir.path(), &format!("{name}.csv"), &body);
    }

    let out = benchviz(
        dir.path(),
        &[
            "sweep",
            "--keys", "4,1024,4096,8192,16384,32768",
            "--series", "spin.csv:spin",
            "--series", "pipe.csv:pipe",
            "--series", "chan.csv:chan",
            "--series", "cond.csv:cond",
            "--x-col", "0",
            "--y-col", "1",
        ],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(dims(&dir.path().join("mpsc.png")), (1040, 800));
}

#[test]
fn sweep_length_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "short.csv", "cap,time\n4,1\n1024,2\n");
    let out = benchviz(
        dir.path(),
        &["sweep", "--keys", "4,1024,4096", "--series", "short.csv:short", "--x-col", "0", "--y-col", "1"],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("short"));
    assert!(!dir.path().join("mpsc.png").exists());
}

#[test]
fn relplot_uses_declared_columns_and_size() {
    let dir = tempfile::tempdir().unwrap();
    // value first, counter second
    write(dir.path(), "reorder.csv", "n,counter\n3,1\n5,2\n4,3\n");
    let out = benchviz(
        dir.path(),
        &["relplot", "--input", "reorder.csv", "--x-col", "1", "--y-col", "0", "--out", "r.png"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(dims(&dir.path().join("r.png")), (520, 400));
}

#[test]
fn unknown_theme_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.csv", "time\n1.0\n2.0\n");
    let out = benchviz(dir.path(), &["--theme", "neon", "overlay", "--series", "a.csv:a:red", "--y-col", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("neon"));
}
