use serde::{Deserialize, Serialize};

use super::{CHART_STYLE, ChartSettings};

/// Outer padding of the plot area. Unset sides are auto-fitted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridOption {
    /// Tick labels are kept inside the grid rectangle.
    pub contain_label: bool,
    pub top: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
}

/// Builds plot-area padding from title and dimension-axis visibility.
///
/// One padding value serves every side since title font metrics are shared
/// by all axes.
#[must_use]
pub fn build_chart_grid(settings: &ChartSettings) -> GridOption {
    let axis_name_padding = CHART_STYLE.axis_name.size + CHART_STYLE.axis_name_padding;

    // Unlike the name gap, an unset labels flag does not reserve space here.
    let has_y_axis_name =
        settings.y_axis_labels_enabled == Some(true) && settings.y_axis_title_text.is_some();
    let (left, right) = if has_y_axis_name {
        (Some(axis_name_padding), Some(axis_name_padding))
    } else {
        (None, None)
    };

    let bottom = settings
        .x_axis_display
        .is_visible()
        .then_some(axis_name_padding);

    GridOption {
        contain_label: true,
        top: 0.0,
        left,
        right,
        bottom,
    }
}
