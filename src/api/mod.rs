//! Axis and plot-area layout for two-dimensional cartesian charts.
//!
//! Every entry point is a pure function of a [`ChartModel`](crate::core::ChartModel),
//! a [`ChartSettings`] snapshot, per-slot [`AxisFormatter`]s and a
//! [`RenderingContext`]. Ranges and name gaps are resolved independently and
//! merged into declarative descriptors for the rendering layer.

mod axis_formatter;
mod axis_name_gap_resolver;
mod axis_option;
mod axis_option_builder;
mod axis_range_resolver;
mod axis_tick_geometry_estimator;
mod cartesian_layout;
mod chart_settings;
mod chart_style;
mod dimension_label_formatter;
mod grid_layout_builder;
mod rendering_context;

pub use axis_formatter::{AxesFormatters, AxisFormatter, AxisFormatterFn};
pub use axis_name_gap_resolver::{x_axis_name_gap, y_axis_name_gap};
pub use axis_option::{
    AxisNameOption, AxisPosition, AxisType, CartesianAxesOption, DimensionAxisLabelOption,
    DimensionAxisOption, LineStyleOption, MetricAxisLabelOption, MetricAxisOption, NameLocation,
    SplitLineOption, TextStyleOption, TickLabelStyle,
};
pub use axis_option_builder::{
    build_axes, build_dimension_axis, build_metric_axes, rotate_angle, x_axis_type,
};
pub use axis_range_resolver::{AxisRange, resolve_axis_ranges, resolve_custom_axis_range};
pub use axis_tick_geometry_estimator::{x_ticks_height, y_ticks_width};
pub use cartesian_layout::{CartesianLayout, build_cartesian_layout};
pub use chart_settings::{
    ChartSettings, STACK_TYPE_KEY, StackType, X_AXIS_ENABLED_KEY, X_AXIS_SCALE_KEY,
    X_AXIS_TITLE_TEXT_KEY, XAxisDisplay, XAxisScale, Y_AXIS_AUTO_RANGE_KEY,
    Y_AXIS_LABELS_ENABLED_KEY, Y_AXIS_MAX_KEY, Y_AXIS_MIN_KEY, Y_AXIS_TITLE_TEXT_KEY,
};
pub use chart_style::{AxisTextStyle, CHART_STYLE, ChartStyle};
pub use dimension_label_formatter::{DimensionLabelFormatter, DimensionTickDecoding};
pub use grid_layout_builder::{GridOption, build_chart_grid};
pub use rendering_context::{HeuristicRenderingContext, RenderingContext, ThemeColor};
