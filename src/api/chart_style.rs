use crate::render::FontStyle;

/// Size/weight pair for one class of axis text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTextStyle {
    pub size: f64,
    pub weight: u16,
}

impl AxisTextStyle {
    #[must_use]
    pub fn with_family(self, family: &str) -> FontStyle {
        FontStyle::new(self.size, self.weight, family)
    }
}

/// Fixed typography and spacing shared by every cartesian chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    /// Axis title text.
    pub axis_name: AxisTextStyle,
    /// Tick label text.
    pub axis_ticks: AxisTextStyle,
    /// Space between tick labels and the axis title.
    pub axis_name_padding: f64,
    /// Fraction of the axis length left empty on each side of category/time axes.
    pub axis_boundary_gap: f64,
    /// Dash length of metric-axis split lines.
    pub split_line_dash_px: f64,
}

pub const CHART_STYLE: ChartStyle = ChartStyle {
    axis_name: AxisTextStyle {
        size: 12.0,
        weight: 700,
    },
    axis_ticks: AxisTextStyle {
        size: 12.0,
        weight: 700,
    },
    axis_name_padding: 12.0,
    axis_boundary_gap: 0.02,
    split_line_dash_px: 5.0,
};
