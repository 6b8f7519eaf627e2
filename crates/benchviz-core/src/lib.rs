// File: crates/benchviz-core/src/lib.rs
// Summary: Core library entry point; loads benchmark series, reshapes them and renders comparison charts.

pub mod error;
pub mod series;
pub mod loader;
pub mod dataset;
pub mod kde;
pub mod chart;
pub mod chart_spec;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod color;
pub mod legend;
pub mod downsample;

pub use error::{Error, Result};
pub use series::{LineStyle, Sample, Series};
pub use loader::{load_series, ColumnMap, SeriesMeta};
pub use dataset::{Dataset, Keys, Record};
pub use chart::{draw_chart, render_all, render_chart, render_to_png_bytes, Figure, RenderOptions, Rendered};
pub use chart_spec::{ChartInput, ChartKind, ChartSpec};
pub use axis::{Axis, ScaleKind};
pub use types::FigureSize;
pub use theme::Theme;
pub use color::parse_color;
pub use legend::LegendCorner;
pub use downsample::lttb;
