use smallvec::SmallVec;
use tracing::debug;

use crate::core::{ChartModel, Extent};
use crate::render::LineStrokeStyle;

use super::axis_name_gap_resolver::{x_axis_name_gap, y_axis_name_gap};
use super::axis_option::{
    AxisNameOption, AxisPosition, AxisType, CartesianAxesOption, DimensionAxisLabelOption,
    DimensionAxisOption, LineStyleOption, MetricAxisLabelOption, MetricAxisOption, NameLocation,
    SplitLineOption, TextStyleOption, TickLabelStyle,
};
use super::axis_range_resolver::resolve_axis_ranges;
use super::{
    AxesFormatters, AxisFormatter, AxisRange, CHART_STYLE, ChartSettings, DimensionLabelFormatter,
    DimensionTickDecoding, RenderingContext, ThemeColor, XAxisDisplay, XAxisScale,
};

#[must_use]
pub fn x_axis_type(settings: &ChartSettings) -> AxisType {
    match settings.x_axis_scale {
        XAxisScale::Timeseries => AxisType::Time,
        XAxisScale::Linear => AxisType::Value,
        XAxisScale::Ordinal | XAxisScale::Histogram | XAxisScale::Log | XAxisScale::Pow => {
            AxisType::Category
        }
    }
}

/// Dimension tick label rotation in degrees, `None` for unrotated modes.
#[must_use]
pub fn rotate_angle(settings: &ChartSettings) -> Option<f64> {
    match settings.x_axis_display {
        XAxisDisplay::Rotate45 => Some(45.0),
        XAxisDisplay::Rotate90 => Some(90.0),
        XAxisDisplay::Hidden
        | XAxisDisplay::Shown
        | XAxisDisplay::Compact
        | XAxisDisplay::Unrecognized(_) => None,
    }
}

fn axis_name_option<C: RenderingContext + ?Sized>(
    ctx: &C,
    name_gap: f64,
    name: Option<&str>,
) -> AxisNameOption {
    AxisNameOption {
        name: name.map(str::to_owned),
        name_gap,
        name_location: NameLocation::Middle,
        name_text_style: TextStyleOption {
            color: ctx.color(ThemeColor::TextDark),
            font_size: CHART_STYLE.axis_name.size,
            font_weight: CHART_STYLE.axis_name.weight,
            font_family: ctx.font_family().to_owned(),
        },
    }
}

fn tick_label_style<C: RenderingContext + ?Sized>(ctx: &C) -> TickLabelStyle {
    TickLabelStyle {
        hide_overlap: true,
        text: TextStyleOption {
            color: ctx.color(ThemeColor::TextDark),
            font_size: CHART_STYLE.axis_ticks.size,
            font_weight: CHART_STYLE.axis_ticks.weight,
            font_family: ctx.font_family().to_owned(),
        },
    }
}

fn dimension_tick_decoding(axis_type: AxisType, model: &ChartModel) -> DimensionTickDecoding {
    if axis_type == AxisType::Time {
        DimensionTickDecoding::Timestamp
    } else if model.dimension_model.numeric {
        DimensionTickDecoding::Integer
    } else {
        DimensionTickDecoding::Text
    }
}

#[must_use]
pub fn build_dimension_axis<C: RenderingContext + ?Sized>(
    model: &ChartModel,
    settings: &ChartSettings,
    formatter: &AxisFormatter,
    ctx: &C,
) -> DimensionAxisOption {
    let axis_type = x_axis_type(settings);
    let boundary_gap = (axis_type != AxisType::Value)
        .then_some([CHART_STYLE.axis_boundary_gap, CHART_STYLE.axis_boundary_gap]);
    let name_gap = x_axis_name_gap(model, settings, formatter, ctx);

    DimensionAxisOption {
        axis_type,
        name: axis_name_option(ctx, name_gap, settings.x_axis_title_text.as_deref()),
        show_axis_tick: false,
        boundary_gap,
        split_line: SplitLineOption {
            show: false,
            line_style: None,
        },
        axis_label: DimensionAxisLabelOption {
            show: settings.x_axis_display.is_visible(),
            rotate: rotate_angle(settings),
            style: tick_label_style(ctx),
            formatter: DimensionLabelFormatter::new(
                dimension_tick_decoding(axis_type, model),
                formatter.clone(),
            ),
        },
        axis_line: LineStyleOption {
            color: ctx.color(ThemeColor::TextDark),
            stroke: LineStrokeStyle::Solid,
        },
    }
}

fn build_metric_axis<C: RenderingContext + ?Sized>(
    settings: &ChartSettings,
    position: AxisPosition,
    range: AxisRange,
    extent: Extent,
    formatter: &AxisFormatter,
    ctx: &C,
) -> MetricAxisOption {
    let name_gap = y_axis_name_gap(extent, formatter, settings, ctx);

    MetricAxisOption {
        range,
        name: axis_name_option(ctx, name_gap, settings.y_axis_title_text.as_deref()),
        split_line: SplitLineOption {
            show: true,
            line_style: Some(LineStyleOption {
                color: ctx.color(ThemeColor::Border),
                stroke: LineStrokeStyle::Dashed {
                    dash_px: CHART_STYLE.split_line_dash_px,
                },
            }),
        },
        position,
        axis_label: MetricAxisLabelOption {
            style: tick_label_style(ctx),
            formatter: formatter.clone(),
        },
    }
}

/// Builds the metric axes that have both a formatter and a data extent.
///
/// Either slot may be missing, so single-axis, dual-axis and axis-less charts
/// share this path.
#[must_use]
pub fn build_metric_axes<C: RenderingContext + ?Sized>(
    model: &ChartModel,
    settings: &ChartSettings,
    formatters: &AxesFormatters,
    ctx: &C,
) -> SmallVec<[MetricAxisOption; 2]> {
    let (left_range, right_range) = resolve_axis_ranges(model.y_axis_extents, settings);
    let slots = [
        (
            AxisPosition::Left,
            left_range,
            model.y_axis_extents.left,
            formatters.left.as_ref(),
        ),
        (
            AxisPosition::Right,
            right_range,
            model.y_axis_extents.right,
            formatters.right.as_ref(),
        ),
    ];

    slots
        .into_iter()
        .filter_map(|(position, range, extent, formatter)| {
            let (extent, formatter) = (extent?, formatter?);
            Some(build_metric_axis(
                settings, position, range, extent, formatter, ctx,
            ))
        })
        .collect()
}

/// Assembles the dimension axis and every present metric axis.
#[must_use]
pub fn build_axes<C: RenderingContext + ?Sized>(
    model: &ChartModel,
    settings: &ChartSettings,
    formatters: &AxesFormatters,
    ctx: &C,
) -> CartesianAxesOption {
    let x_axis = build_dimension_axis(model, settings, &formatters.bottom, ctx);
    let y_axis = build_metric_axes(model, settings, formatters, ctx);
    debug!(
        rows = model.dataset.len(),
        x_axis_type = ?x_axis.axis_type,
        metric_axes = y_axis.len(),
        "built cartesian axes"
    );

    CartesianAxesOption { x_axis, y_axis }
}
