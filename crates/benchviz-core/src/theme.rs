// File: crates/benchviz-core/src/theme.rs
// Summary: Figure themes (darkgrid / white) for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: Option<skia::Color>, // darkgrid draws no spines
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// Grey plot area with a white grid.
    pub fn darkgrid() -> Self {
        Self {
            name: "darkgrid",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 0xea, 0xea, 0xf2),
            grid: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: None,
            axis_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            legend_background: skia::Color::from_argb(204, 0xea, 0xea, 0xf2),
            legend_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
        }
    }

    /// White plot area, light grid, black spines.
    pub fn white() -> Self {
        Self {
            name: "white",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xeb, 0xeb, 0xeb),
            axis_line: Some(skia::Color::from_argb(255, 0, 0, 0)),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0x33, 0x33, 0x33),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::darkgrid(), Theme::white()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
