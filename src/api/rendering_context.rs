use crate::render::{Color, FontStyle};

/// Named theme colors looked up by axis descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    /// Axis titles, tick labels and the dimension axis line.
    TextDark,
    /// Metric-axis split lines.
    Border,
}

/// Host services the layout engine needs from the rendering layer.
///
/// Implementations are supplied fresh per render and are only read; the
/// engine keeps nothing from a context once a call returns. Contexts are
/// `Sync` so row scans may run on a thread pool.
pub trait RenderingContext: Sync {
    fn color(&self, color: ThemeColor) -> Color;

    /// Rendered width of a single line of `text` in pixels.
    fn measure_text(&self, text: &str, style: &FontStyle) -> f64;

    fn font_family(&self) -> &str;
}

/// Backend-independent context with fixed colors and glyph-class width estimates.
///
/// Useful for headless layout and for tests where exact shaping is not needed.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicRenderingContext {
    pub font_family: String,
    pub text_dark: Color,
    pub border: Color,
}

impl Default for HeuristicRenderingContext {
    fn default() -> Self {
        Self {
            font_family: "Lato".to_owned(),
            text_dark: Color::rgb(0.298, 0.337, 0.388),
            border: Color::rgb(0.933, 0.925, 0.925),
        }
    }
}

impl HeuristicRenderingContext {
    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }
}

impl RenderingContext for HeuristicRenderingContext {
    fn color(&self, color: ThemeColor) -> Color {
        match color {
            ThemeColor::TextDark => self.text_dark,
            ThemeColor::Border => self.border,
        }
    }

    fn measure_text(&self, text: &str, style: &FontStyle) -> f64 {
        estimate_text_width_px(text, style)
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }
}

pub(crate) fn estimate_text_width_px(text: &str, style: &FontStyle) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            'A'..='Z' => 0.68,
            _ => 0.58,
        }
    });
    // Bold glyphs run roughly 6% wider.
    let weight_factor = if style.weight >= 600 { 1.06 } else { 1.0 };
    units * style.size_px * weight_factor
}
