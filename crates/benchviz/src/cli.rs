// File: crates/benchviz/src/cli.rs
// Summary: Command-line surface: every input path, label, color, column mapping and output is declared here.

use std::path::PathBuf;
use std::str::FromStr;

use benchviz_core::FigureSize;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render benchmark CSV results as comparison charts", long_about = None)]
pub struct Cli {
    /// Figure theme: darkgrid or white
    #[arg(long, global = true, default_value = "darkgrid")]
    pub theme: String,

    /// Pixels per size unit
    #[arg(long, global = true, default_value_t = 100.0)]
    pub dpi: f32,

    /// Downsample lines longer than this many points before drawing
    #[arg(long, global = true)]
    pub max_points: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Latency line chart plus density chart of the same series
    Overlay(OverlayArgs),
    /// One relational line chart from a two-column file
    Relplot(RelplotArgs),
    /// Capacity sweep: several series against a declared key list
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
pub struct OverlayArgs {
    /// Input series as PATH:LABEL:COLOR (repeatable)
    #[arg(long = "series", required = true)]
    pub series: Vec<OverlaySeries>,

    /// Column holding the measurement (x is the row number)
    #[arg(long)]
    pub y_col: usize,

    #[arg(long, default_value = "chart_line.png")]
    pub line_out: PathBuf,

    #[arg(long, default_value = "chart_sns.png")]
    pub density_out: PathBuf,

    /// Figure size in inches, WxH
    #[arg(long, default_value = "8x5")]
    pub size: FigureSize,

    #[arg(long, default_value = "Benchmark - Response Time")]
    pub title: String,

    #[arg(long, default_value = "Request")]
    pub x_label: String,

    #[arg(long, default_value = "Time(ms)")]
    pub y_label: String,

    /// Draw solid instead of dashed lines
    #[arg(long)]
    pub solid: bool,
}

#[derive(Args, Debug)]
pub struct RelplotArgs {
    #[arg(long)]
    pub input: PathBuf,

    /// Column read as x
    #[arg(long)]
    pub x_col: usize,

    /// Column read as y
    #[arg(long)]
    pub y_col: usize,

    #[arg(long, default_value = "n")]
    pub label: String,

    #[arg(long, default_value = "counter")]
    pub x_label: String,

    #[arg(long, default_value = "n")]
    pub y_label: String,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "reordering.png")]
    pub out: PathBuf,

    #[arg(long, default_value = "5.2x4")]
    pub size: FigureSize,
}

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Shared x keys, e.g. 4,1024,4096,8192,16384,32768
    #[arg(long, required = true, value_delimiter = ',')]
    pub keys: Vec<f64>,

    /// Input series as PATH:LABEL (repeatable)
    #[arg(long = "series", required = true)]
    pub series: Vec<SweepSeries>,

    /// Column read as x (must parse as a number, then --keys replaces it)
    #[arg(long)]
    pub x_col: usize,

    /// Column read as y
    #[arg(long)]
    pub y_col: usize,

    #[arg(long, default_value = "cap")]
    pub x_label: String,

    #[arg(long, default_value = "time")]
    pub y_label: String,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "mpsc.png")]
    pub out: PathBuf,

    #[arg(long, default_value = "10.4x8")]
    pub size: FigureSize,
}

/// `PATH:LABEL:COLOR`, split from the right so paths may contain ':'.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlaySeries {
    pub path: PathBuf,
    pub label: String,
    pub color: String,
}

impl FromStr for OverlaySeries {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (color, label, path) = (parts.next(), parts.next(), parts.next());
        match (path, label, color) {
            (Some(path), Some(label), Some(color)) if !path.is_empty() && !label.is_empty() && !color.is_empty() => {
                Ok(Self { path: path.into(), label: label.to_string(), color: color.to_string() })
            }
            _ => Err(format!("expected PATH:LABEL:COLOR, got '{s}'")),
        }
    }
}

/// `PATH:LABEL`, split from the right so paths may contain ':'.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepSeries {
    pub path: PathBuf,
    pub label: String,
}

impl FromStr for SweepSeries {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.rsplit_once(':') {
            Some((path, label)) if !path.is_empty() && !label.is_empty() => {
                Ok(Self { path: path.into(), label: label.to_string() })
            }
            _ => Err(format!("expected PATH:LABEL, got '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_series_splits_from_the_right() {
        let s: OverlaySeries = "runs/a:b/benchmark_std.csv:std:green".parse().unwrap();
        assert_eq!(s.path, PathBuf::from("runs/a:b/benchmark_std.csv"));
        assert_eq!(s.label, "std");
        assert_eq!(s.color, "green");
        assert!("benchmark_std.csv:std".parse::<OverlaySeries>().is_err());
    }

    #[test]
    fn sweep_series_needs_label() {
        let s: SweepSeries = "mpsc_spin.csv:spin".parse().unwrap();
        assert_eq!(s, SweepSeries { path: "mpsc_spin.csv".into(), label: "spin".into() });
        assert!("mpsc_spin.csv".parse::<SweepSeries>().is_err());
        assert!("mpsc_spin.csv:".parse::<SweepSeries>().is_err());
    }

    #[test]
    fn column_mapping_is_mandatory() {
        let missing = Cli::try_parse_from(["benchviz", "relplot", "--input", "r.csv", "--y-col", "0"]);
        assert!(missing.is_err());
        let ok = Cli::try_parse_from(["benchviz", "relplot", "--input", "r.csv", "--x-col", "1", "--y-col", "0"]);
        assert!(ok.is_ok());
    }

    #[test]
    fn sweep_keys_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "benchviz", "sweep", "--keys", "4,1024,4096", "--series", "a.csv:a", "--x-col", "0", "--y-col", "1",
        ])
        .unwrap();
        match cli.command {
            Command::Sweep(args) => {
                assert_eq!(args.keys, vec![4.0, 1024.0, 4096.0]);
                assert_eq!(args.size, FigureSize::RELATIONAL);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
