use crate::core::{ChartModel, Extent};

use super::axis_tick_geometry_estimator::{x_ticks_height, y_ticks_width};
use super::{AxisFormatter, CHART_STYLE, ChartSettings, RenderingContext};

/// A metric-axis title reserves space unless labels are explicitly disabled
/// or there is no title text.
fn has_y_axis_name(settings: &ChartSettings) -> bool {
    settings.y_axis_labels_enabled != Some(false) && settings.y_axis_title_text.is_some()
}

/// Offset between the metric axis line and its title.
#[must_use]
pub fn y_axis_name_gap<C: RenderingContext + ?Sized>(
    extent: Extent,
    formatter: &AxisFormatter,
    settings: &ChartSettings,
    ctx: &C,
) -> f64 {
    if !has_y_axis_name(settings) {
        return 0.0;
    }

    y_ticks_width(extent, formatter, settings, ctx) + CHART_STYLE.axis_name_padding
}

/// Offset between the dimension axis line and its title.
///
/// Always computed from tick geometry, whether or not a title is set.
#[must_use]
pub fn x_axis_name_gap<C: RenderingContext + ?Sized>(
    model: &ChartModel,
    settings: &ChartSettings,
    formatter: &AxisFormatter,
    ctx: &C,
) -> f64 {
    x_ticks_height(model, settings, formatter, ctx) + CHART_STYLE.axis_name_padding
}
