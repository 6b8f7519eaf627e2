// File: crates/benchviz-core/src/chart.rs
// Summary: Figure (owned Skia CPU raster canvas) and the chart rendering pipeline writing PNGs.

use std::io::Write;
use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::chart_spec::{ChartInput, ChartKind, ChartSpec};
use crate::color::categorical;
use crate::downsample::lttb;
use crate::error::{Error, Result};
use crate::geometry::RectF;
use crate::grid::format_tick;
use crate::kde;
use crate::legend::{place_legend, LegendCorner};
use crate::scale::AxisScale;
use crate::series::LineStyle;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, DEFAULT_DPI};
use crate::view::ViewState;

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const LEGEND_SIZE: f32 = 12.0;
/// Fill opacity of density curves (0.3).
const DENSITY_FILL_ALPHA: u8 = 77;
/// Rotation applied to crowded x tick labels, in degrees.
const TICK_ROTATION: f32 = 30.0;

pub struct RenderOptions {
    /// Pixels per inch of `FigureSize`.
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, axis titles, tick and legend labels). Off for pixel-exact snapshots.
    pub draw_labels: bool,
    /// Downsample (LTTB) lines longer than this before drawing.
    pub max_points: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            insets: Insets::default(),
            theme: Theme::darkgrid(),
            draw_labels: true,
            max_points: None,
        }
    }
}

/// Owned raster canvas. A figure is handed to every rendering call and reset
/// at the start of each chart, so nothing drawn for one chart leaks into the next.
pub struct Figure {
    surface: skia::Surface,
    width: i32,
    height: i32,
    text: TextShaper,
}

impl Figure {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        Ok(Self { surface: raster(width, height)?, width, height, text: TextShaper::new() })
    }

    /// Resize when the size changed, drop any transform or clip, clear to `background`.
    pub fn reset(&mut self, width: i32, height: i32, background: skia::Color) -> Result<()> {
        if (width, height) != (self.width, self.height) {
            self.surface = raster(width, height)?;
            self.width = width;
            self.height = height;
        }
        let canvas = self.surface.canvas();
        canvas.restore_to_count(1);
        canvas.reset_matrix();
        canvas.clear(background);
        Ok(())
    }

    pub fn width(&self) -> i32 { self.width }

    pub fn height(&self) -> i32 { self.height }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| Error::render("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Current pixels as tightly packed RGBA8 rows.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut px = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut px, row_bytes, (0, 0)) {
            return Err(Error::render("reading back pixels failed"));
        }
        Ok(px)
    }
}

fn raster(width: i32, height: i32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| Error::render(format!("failed to create {width}x{height} raster surface")))
}

/// What one chart put on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendered {
    pub path: PathBuf,
    pub width: i32,
    pub height: i32,
    /// Legend entries, in drawing order.
    pub legend: Vec<String>,
    pub legend_corner: LegendCorner,
    /// Points per drawn line, same order as `legend`.
    pub line_points: Vec<usize>,
    pub x_scale: ScaleKind,
    pub rotated_ticks: bool,
}

struct Line {
    label: String,
    color: skia::Color,
    style: LineStyle,
    width: f32,
    fill: bool,
    points: Vec<(f64, f64)>,
}

/// Draw `spec` onto `figure` and write it to `spec.output`.
pub fn render_chart(figure: &mut Figure, spec: &ChartSpec<'_>, opts: &RenderOptions) -> Result<Rendered> {
    let rendered = draw_chart(figure, spec, opts)?;
    let bytes = figure.encode_png()?;
    write_atomic(&spec.output, &bytes)?;
    log::info!(
        "wrote {} ({}x{}, {} lines)",
        spec.output.display(),
        rendered.width,
        rendered.height,
        rendered.legend.len()
    );
    Ok(rendered)
}

/// Render several charts in order on one figure. Stops at the first failure;
/// files written before it stay on disk.
pub fn render_all(figure: &mut Figure, specs: &[ChartSpec<'_>], opts: &RenderOptions) -> Result<Vec<Rendered>> {
    specs.iter().map(|spec| render_chart(figure, spec, opts)).collect()
}

/// Render to in-memory PNG bytes without touching the filesystem.
pub fn render_to_png_bytes(figure: &mut Figure, spec: &ChartSpec<'_>, opts: &RenderOptions) -> Result<Vec<u8>> {
    draw_chart(figure, spec, opts)?;
    figure.encode_png()
}

/// Reset `figure` and draw `spec` on it.
pub fn draw_chart(figure: &mut Figure, spec: &ChartSpec<'_>, opts: &RenderOptions) -> Result<Rendered> {
    let lines = prepare_lines(spec, opts)?;
    let theme = &opts.theme;
    let k = opts.dpi / DEFAULT_DPI;

    let (w, h) = spec.figure_size().to_pixels(opts.dpi);
    figure.reset(w, h, theme.background)?;

    // Axes
    let mut view = ViewState::from_points(lines.iter().map(|l| l.points.as_slice()));
    if spec.kind == ChartKind::OverlayDensity {
        view = view.with_y_floor(0.0);
    }
    let x_axis = match (spec.kind, spec.input) {
        (ChartKind::Relational, ChartInput::Table(t)) => match t.declared_keys() {
            Some(keys) => key_axis(&spec.x_label, keys),
            None => Axis::new(spec.x_label.as_str(), view.x_min, view.x_max),
        },
        _ => Axis::new(spec.x_label.as_str(), view.x_min, view.x_max),
    };
    let y_axis = Axis::new(spec.y_label.as_str(), view.y_min, view.y_max);

    // Plot rect
    let ins = &opts.insets;
    let title_h = if spec.title.is_empty() { 0.0 } else { (TITLE_SIZE + 12.0) * k };
    let mut plot = RectF::from_ltrb(
        ins.left as f32 * k,
        ins.top as f32 * k + title_h,
        w as f32 - ins.right as f32 * k,
        h as f32 - ins.bottom as f32 * k,
    );

    let x_ticks = x_axis.tick_values(8);
    let x_labels: Vec<String> = x_ticks.iter().map(|v| format_tick(*v)).collect();
    let rotated = spec.kind == ChartKind::Relational && ticks_collide(&x_axis, &x_ticks, &x_labels, plot, TICK_SIZE * k);
    if rotated {
        let widest = x_labels.iter().map(|s| approx_text_width(s, TICK_SIZE * k)).fold(0.0, f32::max);
        plot.bottom -= widest * TICK_ROTATION.to_radians().sin();
    }
    if plot.width() < 10.0 || plot.height() < 10.0 {
        return Err(Error::render(format!("figure {w}x{h} px leaves no room for the plot area")));
    }

    let sx = AxisScale::new(&x_axis, plot.left, plot.right);
    let sy = AxisScale::new(&y_axis, plot.bottom, plot.top);
    let y_ticks = y_axis.tick_values(6);

    let Figure { surface, text, .. } = figure;
    let canvas = surface.canvas();

    draw_frame(canvas, theme, plot, &x_ticks, &y_ticks, &sx, &sy);

    // Series
    canvas.save();
    canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
    for line in &lines {
        draw_line(canvas, line, &sx, &sy, k);
    }
    canvas.restore();

    // Legend
    let px_points: Vec<(f32, f32)> = lines.iter().flat_map(|l| densify(&l.points, &sx, &sy)).collect();
    let legend_corner = draw_legend(canvas, text, theme, &lines, plot, &px_points, opts.draw_labels, k);

    if opts.draw_labels {
        let tick_size = TICK_SIZE * k;
        for (v, label) in x_ticks.iter().zip(&x_labels) {
            let x = sx.to_px(*v);
            if rotated {
                canvas.save();
                canvas.translate((x, plot.bottom + 4.0 * k));
                canvas.rotate(-TICK_ROTATION, None);
                text.draw_right(canvas, label, 0.0, tick_size, tick_size, theme.tick);
                canvas.restore();
            } else {
                text.draw_centered(canvas, label, x, plot.bottom + 6.0 * k + tick_size, tick_size, theme.tick);
            }
        }
        for v in &y_ticks {
            let y = sy.to_px(*v);
            text.draw_right(canvas, &format_tick(*v), plot.left - 6.0 * k, y + tick_size * 0.35, tick_size, theme.tick);
        }

        let label_size = LABEL_SIZE * k;
        let mid_x = (plot.left + plot.right) * 0.5;
        let mid_y = (plot.top + plot.bottom) * 0.5;
        text.draw_centered(canvas, &x_axis.label, mid_x, h as f32 - 10.0 * k, label_size, theme.axis_label);
        canvas.save();
        canvas.translate((6.0 * k + label_size, mid_y));
        canvas.rotate(-90.0, None);
        text.draw_centered(canvas, &y_axis.label, 0.0, 0.0, label_size, theme.axis_label);
        canvas.restore();

        if !spec.title.is_empty() {
            text.draw_centered(
                canvas,
                &spec.title,
                mid_x,
                ins.top as f32 * k + TITLE_SIZE * k,
                TITLE_SIZE * k,
                theme.axis_label,
            );
        }
    }

    log::debug!(
        "{:?} chart: {} lines, x {:?} [{}, {}], legend {:?}, rotated ticks {}",
        spec.kind,
        lines.len(),
        x_axis.kind,
        x_axis.min,
        x_axis.max,
        legend_corner,
        rotated
    );

    Ok(Rendered {
        path: spec.output.clone(),
        width: w,
        height: h,
        legend: lines.iter().map(|l| l.label.clone()).collect(),
        legend_corner,
        line_points: lines.iter().map(|l| l.points.len()).collect(),
        x_scale: x_axis.kind,
        rotated_ticks: rotated,
    })
}

// ---- preparation ------------------------------------------------------------

fn prepare_lines(spec: &ChartSpec<'_>, opts: &RenderOptions) -> Result<Vec<Line>> {
    let mut sources: Vec<(String, skia::Color, LineStyle, Vec<(f64, f64)>)> = match spec.input {
        ChartInput::Series(series) => series
            .iter()
            .map(|s| (s.label.clone(), s.color, s.style, s.points()))
            .collect(),
        ChartInput::Table(table) => {
            let lines = table.lines();
            let colors = categorical(lines.len());
            lines
                .into_iter()
                .zip(colors)
                .map(|((label, pts), color)| (label, color, LineStyle::Solid, pts))
                .collect()
        }
    };

    if sources.is_empty() {
        return Err(Error::render(format!("{:?} chart needs at least one series", spec.kind)));
    }
    if let Some((label, ..)) = sources.iter().find(|(.., pts)| pts.is_empty()) {
        return Err(Error::render(format!("series '{label}' has no samples")));
    }

    let downsample = |pts: Vec<(f64, f64)>| match opts.max_points {
        Some(max) if pts.len() > max && max >= 2 => lttb(&pts, max),
        _ => pts,
    };

    let lines = match spec.kind {
        ChartKind::OverlayLine => sources
            .into_iter()
            .map(|(label, color, style, pts)| Line { label, color, style, width: 1.0, fill: false, points: downsample(pts) })
            .collect(),
        ChartKind::Relational => {
            // hue-keyed: colors follow label order regardless of input colors
            let colors = categorical(sources.len());
            for (src, color) in sources.iter_mut().zip(colors) {
                src.1 = color;
            }
            sources
                .into_iter()
                .map(|(label, color, _, pts)| Line {
                    label,
                    color,
                    style: LineStyle::Solid,
                    width: 2.0,
                    fill: false,
                    points: downsample(pts),
                })
                .collect()
        }
        ChartKind::OverlayDensity => {
            let mut out = Vec::with_capacity(sources.len());
            for (label, color, _, pts) in sources {
                let values: Vec<f64> = pts.iter().map(|p| p.1).collect();
                match kde::estimate(&values) {
                    Some(curve) => out.push(Line { label, color, style: LineStyle::Solid, width: 1.5, fill: true, points: curve }),
                    None => log::warn!("series '{label}' has too few distinct values for a density estimate; skipped"),
                }
            }
            if out.is_empty() {
                return Err(Error::render("no series has enough spread for a density estimate"));
            }
            out
        }
    };
    Ok(lines)
}

/// X axis over declared keys: ticks at the keys, log-scaled when they span
/// two or more orders of magnitude.
fn key_axis(label: &str, keys: &[f64]) -> Axis {
    let (lo, hi) = keys
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo > 0.0 && hi / lo >= 100.0 {
        let pad = (hi / lo).powf(0.03);
        Axis::new(label, lo / pad, hi * pad).log10().with_ticks(keys.to_vec())
    } else {
        let span = (hi - lo).max(1.0);
        let axis = Axis::new(label, lo - span * 0.03, hi + span * 0.03);
        if keys.len() <= 12 { axis.with_ticks(keys.to_vec()) } else { axis }
    }
}

/// Estimated advance width; layout must not depend on which fonts are installed.
fn approx_text_width(s: &str, size: f32) -> f32 {
    s.chars().count() as f32 * size * 0.6
}

fn ticks_collide(axis: &Axis, ticks: &[f64], labels: &[String], plot: RectF, size: f32) -> bool {
    let sx = AxisScale::new(axis, plot.left, plot.right);
    ticks
        .windows(2)
        .zip(labels.windows(2))
        .any(|(t, l)| {
            let gap = (sx.to_px(t[1]) - sx.to_px(t[0])).abs();
            let need = (approx_text_width(&l[0], size) + approx_text_width(&l[1], size)) * 0.5 + 4.0;
            gap < need
        })
}

/// Pixel positions along a polyline, at most ~4 px apart, for legend overlap tests.
fn densify(points: &[(f64, f64)], sx: &AxisScale, sy: &AxisScale) -> Vec<(f32, f32)> {
    let px: Vec<(f32, f32)> = points.iter().map(|&(x, y)| (sx.to_px(x), sy.to_px(y))).collect();
    let mut out = Vec::with_capacity(px.len());
    for seg in px.windows(2) {
        let ((x0, y0), (x1, y1)) = (seg[0], seg[1]);
        let steps = ((x1 - x0).hypot(y1 - y0) / 4.0).ceil().clamp(1.0, 256.0) as usize;
        out.extend((0..steps).map(|i| {
            let t = i as f32 / steps as f32;
            (x0 + (x1 - x0) * t, y0 + (y1 - y0) * t)
        }));
    }
    out.extend(px.last().copied());
    out
}

// ---- drawing ----------------------------------------------------------------

fn draw_frame(
    canvas: &skia::Canvas,
    theme: &Theme,
    plot: RectF,
    x_ticks: &[f64],
    y_ticks: &[f64],
    sx: &AxisScale,
    sy: &AxisScale,
) {
    let mut bg = skia::Paint::default();
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(theme.plot_background);
    canvas.draw_rect(plot.to_skia(), &bg);

    let mut grid = skia::Paint::default();
    grid.set_color(theme.grid);
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);
    for &v in x_ticks {
        let x = sx.to_px(v);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &grid);
    }
    for &v in y_ticks {
        let y = sy.to_px(v);
        canvas.draw_line((plot.left, y), (plot.right, y), &grid);
    }

    if let Some(color) = theme.axis_line {
        let mut axis_paint = skia::Paint::default();
        axis_paint.set_color(color);
        axis_paint.set_anti_alias(true);
        axis_paint.set_stroke_width(1.0);
        canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &axis_paint);
        canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &axis_paint);
    }
}

fn stroke_paint(color: skia::Color, width: f32, style: LineStyle, k: f32) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width * k);
    stroke.set_color(color);
    if style == LineStyle::Dashed {
        stroke.set_path_effect(skia::PathEffect::dash(&[6.0 * k, 3.0 * k], 0.0));
    }
    stroke
}

fn draw_line(canvas: &skia::Canvas, line: &Line, sx: &AxisScale, sy: &AxisScale, k: f32) {
    let data = &line.points;
    if data.len() == 1 {
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_color(line.color);
        let (x, y) = data[0];
        canvas.draw_circle((sx.to_px(x), sy.to_px(y)), 2.5 * k, &dot);
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    if line.fill {
        let base = sy.to_px(0.0);
        let mut area = path.clone();
        let (xn, _) = data[data.len() - 1];
        area.line_to((sx.to_px(xn), base));
        area.line_to((sx.to_px(x0), base));
        area.close();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(line.color.with_a(DENSITY_FILL_ALPHA));
        canvas.draw_path(&area, &fill);
    }

    canvas.draw_path(&path, &stroke_paint(line.color, line.width, line.style, k));
}

#[allow(clippy::too_many_arguments)]
fn draw_legend(
    canvas: &skia::Canvas,
    text: &TextShaper,
    theme: &Theme,
    lines: &[Line],
    plot: RectF,
    px_points: &[(f32, f32)],
    draw_labels: bool,
    k: f32,
) -> LegendCorner {
    let size = LEGEND_SIZE * k;
    let pad = 8.0 * k;
    let swatch = 24.0 * k;
    let row_h = size * 1.6;
    let widest = lines.iter().map(|l| approx_text_width(&l.label, size)).fold(0.0, f32::max);
    let box_w = pad * 3.0 + swatch + widest;
    let box_h = pad * 2.0 + row_h * lines.len() as f32;

    let (corner, rect) = place_legend(plot, box_w, box_h, 10.0 * k, px_points);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(theme.legend_background);
    let rrect = skia::RRect::new_rect_xy(rect.to_skia(), 4.0 * k, 4.0 * k);
    canvas.draw_rrect(&rrect, &bg);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rrect(&rrect, &border);

    for (i, line) in lines.iter().enumerate() {
        let cy = rect.top + pad + row_h * (i as f32 + 0.5);
        let x0 = rect.left + pad;
        if line.fill {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_color(line.color.with_a(DENSITY_FILL_ALPHA));
            canvas.draw_rect(skia::Rect::from_ltrb(x0, cy - size * 0.4, x0 + swatch, cy + size * 0.4), &fill);
        }
        let stroke = stroke_paint(line.color, line.width.max(1.5), line.style, k);
        canvas.draw_line((x0, cy), (x0 + swatch, cy), &stroke);
        if draw_labels {
            text.draw_left(canvas, &line.label, x0 + swatch + pad, cy + size * 0.35, size, theme.axis_label);
        }
    }
    corner
}

// ---- output -----------------------------------------------------------------

/// Mode for a chart written to `path`: the existing file's, else 0644 on unix.
fn output_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(meta) = std::fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(std::fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

/// Write `bytes` to a temporary file next to `path`, then rename it over `path`.
/// The destination directory must already exist.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(Error::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "output directory does not exist"),
        ));
    }

    let mut tmp = tempfile::Builder::new()
        .prefix(".benchviz-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::io(path, e))?;
    tmp.write_all(bytes).map_err(|e| Error::io(path, e))?;
    // temp files are created owner-only; keep the target's mode instead
    if let Some(perms) = output_permissions(path) {
        tmp.as_file().set_permissions(perms).map_err(|e| Error::io(path, e))?;
    }
    tmp.as_file().sync_all().map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
