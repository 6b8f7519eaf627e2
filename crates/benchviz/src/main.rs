// File: crates/benchviz/src/main.rs
// Summary: CLI that loads benchmark CSVs and renders latency overlays, relational plots and capacity sweeps to PNGs.

mod cli;

use anyhow::{Context, Result};
use benchviz_core::series::LineStyle;
use benchviz_core::theme;
use benchviz_core::{
    load_series, parse_color, render_chart, ChartSpec, ColumnMap, Dataset, Figure, Keys, RenderOptions,
    Rendered, Series, SeriesMeta,
};
use clap::Parser;

use crate::cli::{Cli, Command, OverlayArgs, RelplotArgs, SweepArgs};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let opts = render_options(&cli)?;

    match &cli.command {
        Command::Overlay(args) => overlay(args, &opts),
        Command::Relplot(args) => relplot(args, &opts),
        Command::Sweep(args) => sweep(args, &opts),
    }
}

fn render_options(cli: &Cli) -> Result<RenderOptions> {
    let theme = theme::find(&cli.theme).with_context(|| {
        let names: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
        format!("unknown theme '{}' (available: {})", cli.theme, names.join(", "))
    })?;
    if !(cli.dpi.is_finite() && cli.dpi > 0.0) {
        anyhow::bail!("--dpi must be positive, got {}", cli.dpi);
    }
    Ok(RenderOptions { dpi: cli.dpi, theme, max_points: cli.max_points, ..RenderOptions::default() })
}

/// Latency lines and their densities, both from one load of each file.
fn overlay(args: &OverlayArgs, opts: &RenderOptions) -> Result<()> {
    let style = if args.solid { LineStyle::Solid } else { LineStyle::Dashed };
    let mut series = Vec::with_capacity(args.series.len());
    for s in &args.series {
        let color = parse_color(&s.color).with_context(|| format!("series '{}'", s.label))?;
        let meta = SeriesMeta::new(s.label.as_str(), color).with_style(style);
        series.push(load(&s.path, ColumnMap::Indexed { y: args.y_col }, meta)?);
    }

    let specs = [
        ChartSpec::overlay_line(&series, &args.line_out)
            .with_title(args.title.as_str())
            .with_axis_labels(args.x_label.as_str(), args.y_label.as_str())
            .with_size(args.size),
        ChartSpec::overlay_density(&series, &args.density_out)
            .with_axis_labels(args.y_label.as_str(), "Density")
            .with_size(args.size),
    ];
    render(&specs, opts)
}

fn relplot(args: &RelplotArgs, opts: &RenderOptions) -> Result<()> {
    let meta = SeriesMeta::new(args.label.as_str(), parse_color("k")?);
    let columns = ColumnMap::Paired { x: args.x_col, y: args.y_col };
    let series = load(&args.input, columns, meta)?;

    let table = Dataset::aggregate([series], Keys::Index, args.x_label.as_str(), args.y_label.as_str())?;
    let spec = ChartSpec::relational(&table, &args.out)
        .with_title(args.title.as_str())
        .with_size(args.size);
    render(&[spec], opts)
}

fn sweep(args: &SweepArgs, opts: &RenderOptions) -> Result<()> {
    if let Some(bad) = args.keys.iter().find(|k| !k.is_finite()) {
        anyhow::bail!("--keys must be finite numbers, got {bad}");
    }
    let columns = ColumnMap::Paired { x: args.x_col, y: args.y_col };
    let mut series = Vec::with_capacity(args.series.len());
    for s in &args.series {
        // hue colors are assigned at render time
        let meta = SeriesMeta::new(s.label.as_str(), parse_color("k")?);
        series.push(load(&s.path, columns, meta)?);
    }
    println!("Loaded {} series against {} keys", series.len(), args.keys.len());

    let table = Dataset::aggregate(series, Keys::Declared(args.keys.clone()), args.x_label.as_str(), args.y_label.as_str())
        .context("aggregating capacity sweep")?;
    let spec = ChartSpec::relational(&table, &args.out)
        .with_title(args.title.as_str())
        .with_size(args.size);
    render(&[spec], opts)
}

fn load(path: &std::path::Path, columns: ColumnMap, meta: SeriesMeta) -> Result<Series> {
    let series = load_series(path, columns, meta)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows from {}", series.len(), path.display());
    Ok(series)
}

/// Render in order on one figure; charts written before a failure are kept.
fn render(specs: &[ChartSpec<'_>], opts: &RenderOptions) -> Result<()> {
    let (w, h) = specs
        .first()
        .map(|s| s.figure_size().to_pixels(opts.dpi))
        .unwrap_or((1, 1));
    let mut figure = Figure::new(w, h)?;
    for spec in specs {
        let Rendered { path, legend, .. } = render_chart(&mut figure, spec, opts)
            .with_context(|| format!("failed to render '{}'", spec.output.display()))?;
        println!("Wrote {} [{}]", path.display(), legend.join(", "));
    }
    Ok(())
}
