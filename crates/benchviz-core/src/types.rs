// File: crates/benchviz-core/src/types.rs
// Summary: Shared types and constants (figure sizes, DPI, paddings).

/// Pixels per size unit (inch).
pub const DEFAULT_DPI: f32 = 100.0;

/// Figure size in inches; pixel size is `inches * dpi`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl FigureSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// 8 × 5: the latency line/density pair.
    pub const OVERLAY: Self = Self::new(8.0, 5.0);
    /// Height 8 at aspect 1.3: capacity-sweep relational charts.
    pub const RELATIONAL: Self = Self::new(10.4, 8.0);

    pub fn to_pixels(&self, dpi: f32) -> (i32, i32) {
        let w = (self.width * dpi).round().max(1.0) as i32;
        let h = (self.height * dpi).round().max(1.0) as i32;
        (w, h)
    }
}

impl std::str::FromStr for FigureSize {
    type Err = String;

    /// Parses `WxH`, e.g. `8x5` or `10.4x8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let parse = |v: &str| -> Result<f32, String> {
            let n: f32 = v.trim().parse().map_err(|_| format!("invalid size component '{v}'"))?;
            if n.is_finite() && n > 0.0 { Ok(n) } else { Err(format!("size must be positive, got '{v}'")) }
        };
        Ok(Self::new(parse(w)?, parse(h)?))
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}
