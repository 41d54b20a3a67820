use serde::Serialize;

use crate::core::ChartModel;
use crate::error::{ChartError, ChartResult};

use super::axis_option_builder::build_axes;
use super::grid_layout_builder::{GridOption, build_chart_grid};
use super::{AxesFormatters, CartesianAxesOption, ChartSettings, RenderingContext};

/// Full axis and padding configuration for one cartesian chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartesianLayout {
    pub grid: GridOption,
    #[serde(flatten)]
    pub axes: CartesianAxesOption,
}

/// Runs one layout pass. Never fails: missing or malformed settings fall back
/// to auto behavior and empty datasets still produce a renderable layout.
#[must_use]
pub fn build_cartesian_layout<C: RenderingContext + ?Sized>(
    model: &ChartModel,
    settings: &ChartSettings,
    formatters: &AxesFormatters,
    ctx: &C,
) -> CartesianLayout {
    CartesianLayout {
        grid: build_chart_grid(settings),
        axes: build_axes(model, settings, formatters, ctx),
    }
}

impl CartesianLayout {
    /// Serializes the declarative part of the layout; formatters are omitted.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize cartesian layout: {e}"))
        })
    }
}

impl CartesianAxesOption {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize cartesian axes: {e}"))
        })
    }
}
