use serde::Serialize;
use smallvec::SmallVec;

use crate::render::{Color, LineStrokeStyle};

use super::{AxisFormatter, AxisRange, DimensionLabelFormatter};

/// Scale family of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Discrete, evenly spaced categories.
    Category,
    /// Continuous numeric scale.
    Value,
    /// Continuous time scale.
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
}

/// Placement of an axis title along the axis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NameLocation {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyleOption {
    pub color: Color,
    pub font_size: f64,
    pub font_weight: u16,
    pub font_family: String,
}

/// Axis title block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisNameOption {
    pub name: Option<String>,
    pub name_gap: f64,
    pub name_location: NameLocation,
    pub name_text_style: TextStyleOption,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickLabelStyle {
    /// Renderer drops labels that would overlap a neighbour.
    pub hide_overlap: bool,
    #[serde(flatten)]
    pub text: TextStyleOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineStyleOption {
    pub color: Color,
    pub stroke: LineStrokeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitLineOption {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyleOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionAxisLabelOption {
    pub show: bool,
    /// Label rotation in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(flatten)]
    pub style: TickLabelStyle,
    #[serde(skip_serializing)]
    pub formatter: DimensionLabelFormatter,
}

/// Declarative configuration of the dimension (X) axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionAxisOption {
    pub axis_type: AxisType,
    #[serde(flatten)]
    pub name: AxisNameOption,
    pub show_axis_tick: bool,
    /// Fraction of the axis length kept empty before the first and after the last mark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary_gap: Option<[f64; 2]>,
    pub split_line: SplitLineOption,
    pub axis_label: DimensionAxisLabelOption,
    pub axis_line: LineStyleOption,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricAxisLabelOption {
    #[serde(flatten)]
    pub style: TickLabelStyle,
    #[serde(skip_serializing)]
    pub formatter: AxisFormatter,
}

/// Declarative configuration of one metric (Y) axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricAxisOption {
    #[serde(flatten)]
    pub range: AxisRange,
    #[serde(flatten)]
    pub name: AxisNameOption,
    pub split_line: SplitLineOption,
    pub position: AxisPosition,
    pub axis_label: MetricAxisLabelOption,
}

/// Dimension axis plus zero to two metric axes, left before right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartesianAxesOption {
    pub x_axis: DimensionAxisOption,
    pub y_axis: SmallVec<[MetricAxisOption; 2]>,
}

impl CartesianAxesOption {
    #[must_use]
    pub fn metric_axis(&self, position: AxisPosition) -> Option<&MetricAxisOption> {
        self.y_axis.iter().find(|axis| axis.position == position)
    }
}
