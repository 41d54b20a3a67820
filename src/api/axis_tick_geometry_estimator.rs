use std::f64::consts::SQRT_2;

use ordered_float::OrderedFloat;
use tracing::warn;

#[cfg(feature = "parallel-measure")]
use rayon::prelude::*;

use crate::core::{AxisValue, ChartModel, Extent};
use crate::render::FontStyle;

use super::{AxisFormatter, CHART_STYLE, ChartSettings, RenderingContext, XAxisDisplay};

fn tick_font_style<C: RenderingContext + ?Sized>(ctx: &C) -> FontStyle {
    CHART_STYLE.axis_ticks.with_family(ctx.font_family())
}

/// Width reserved for metric-axis tick labels.
///
/// Gated on the dimension-axis display setting rather than a metric-axis one.
/// That coupling is long-standing layout behavior: flipping it to a Y-axis flag
/// would shift every existing chart whose X axis is hidden, so it is kept as is.
#[must_use]
pub fn y_ticks_width<C: RenderingContext + ?Sized>(
    extent: Extent,
    formatter: &AxisFormatter,
    settings: &ChartSettings,
    ctx: &C,
) -> f64 {
    if !settings.x_axis_display.is_visible() {
        return 0.0;
    }

    let style = tick_font_style(ctx);
    let min_width = ctx.measure_text(&formatter.format(&AxisValue::Number(extent.min)), &style);
    let max_width = ctx.measure_text(&formatter.format(&AxisValue::Number(extent.max)), &style);

    min_width.max(max_width)
}

/// Height reserved for dimension-axis tick labels.
///
/// Rotated modes scan every row once; callers laying out the same dataset per
/// frame should memoize by dataset identity.
#[must_use]
pub fn x_ticks_height<C: RenderingContext + ?Sized>(
    model: &ChartModel,
    settings: &ChartSettings,
    formatter: &AxisFormatter,
    ctx: &C,
) -> f64 {
    match &settings.x_axis_display {
        XAxisDisplay::Hidden => 0.0,
        XAxisDisplay::Shown | XAxisDisplay::Compact => CHART_STYLE.axis_ticks.size,
        XAxisDisplay::Rotate90 => max_dimension_label_width(model, formatter, ctx),
        XAxisDisplay::Rotate45 => max_dimension_label_width(model, formatter, ctx) / SQRT_2,
        XAxisDisplay::Unrecognized(mode) => {
            warn!(
                mode = mode.as_str(),
                "unexpected `graph.x_axis.axis_enabled` value; using single-line tick height"
            );
            CHART_STYLE.axis_ticks.size
        }
    }
}

/// Widest formatted dimension label across the dataset, 0 for an empty dataset.
fn max_dimension_label_width<C: RenderingContext + ?Sized>(
    model: &ChartModel,
    formatter: &AxisFormatter,
    ctx: &C,
) -> f64 {
    let style = tick_font_style(ctx);
    let measure =
        |value: &AxisValue| OrderedFloat(ctx.measure_text(&formatter.format(value), &style));

    #[cfg(feature = "parallel-measure")]
    let widest = model
        .dataset
        .par_iter()
        .map(|datum| measure(model.dimension_value(datum)))
        .max();

    #[cfg(not(feature = "parallel-measure"))]
    let widest = model.dimension_values().map(measure).max();

    widest.map_or(0.0, OrderedFloat::into_inner)
}
