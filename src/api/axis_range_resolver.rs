use serde::{Deserialize, Serialize};

use crate::core::{Extent, YAxisExtents};

use super::ChartSettings;

/// Explicit bounds for a metric axis. An absent bound is left to the renderer's
/// automatic rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl AxisRange {
    pub const NORMALIZED: Self = Self {
        min: Some(0.0),
        max: Some(1.0),
    };

    #[must_use]
    pub fn is_auto(self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Resolves `(left, right)` metric axis ranges.
///
/// Normalized stacking pins both slots to `[0, 1]`; otherwise auto range
/// leaves both unset, and manual mode applies custom bounds per used slot.
#[must_use]
pub fn resolve_axis_ranges(
    extents: YAxisExtents,
    settings: &ChartSettings,
) -> (AxisRange, AxisRange) {
    if settings.is_normalized() {
        return (AxisRange::NORMALIZED, AxisRange::NORMALIZED);
    }

    if settings.y_axis_auto_range {
        return (AxisRange::default(), AxisRange::default());
    }

    let resolve_slot = |extent: Option<Extent>| {
        extent.map_or_else(AxisRange::default, |extent| {
            resolve_custom_axis_range(extent, settings.y_axis_min, settings.y_axis_max)
        })
    };

    (resolve_slot(extents.left), resolve_slot(extents.right))
}

/// Keeps a custom bound only when it widens the view past the data extent,
/// so the resolved range never hides a data point.
#[must_use]
pub fn resolve_custom_axis_range(
    extent: Extent,
    custom_min: Option<f64>,
    custom_max: Option<f64>,
) -> AxisRange {
    AxisRange {
        min: custom_min.filter(|min| min.is_finite() && *min < extent.min),
        max: custom_max.filter(|max| max.is_finite() && *max > extent.max),
    }
}
