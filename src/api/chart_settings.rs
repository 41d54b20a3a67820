use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

pub const STACK_TYPE_KEY: &str = "stackable.stack_type";
pub const Y_AXIS_AUTO_RANGE_KEY: &str = "graph.y_axis.auto_range";
pub const Y_AXIS_MIN_KEY: &str = "graph.y_axis.min";
pub const Y_AXIS_MAX_KEY: &str = "graph.y_axis.max";
pub const X_AXIS_SCALE_KEY: &str = "graph.x_axis.scale";
pub const X_AXIS_ENABLED_KEY: &str = "graph.x_axis.axis_enabled";
pub const Y_AXIS_LABELS_ENABLED_KEY: &str = "graph.y_axis.labels_enabled";
pub const Y_AXIS_TITLE_TEXT_KEY: &str = "graph.y_axis.title_text";
pub const X_AXIS_TITLE_TEXT_KEY: &str = "graph.x_axis.title_text";

/// Series stacking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackType {
    Stacked,
    /// Stacks rescaled per category so they sum to 1.
    Normalized,
}

impl StackType {
    #[must_use]
    pub fn parse_setting(value: &str) -> Option<Self> {
        match value {
            "stacked" => Some(Self::Stacked),
            "normalized" => Some(Self::Normalized),
            _ => None,
        }
    }
}

/// Scale requested for the dimension axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum XAxisScale {
    #[default]
    Ordinal,
    Timeseries,
    Linear,
    Histogram,
    Log,
    Pow,
}

impl XAxisScale {
    /// Unknown scale names fall back to `Ordinal`.
    #[must_use]
    pub fn parse_setting(value: &str) -> Self {
        match value {
            "timeseries" => Self::Timeseries,
            "linear" => Self::Linear,
            "histogram" => Self::Histogram,
            "log" => Self::Log,
            "pow" => Self::Pow,
            _ => Self::Ordinal,
        }
    }
}

/// Visibility and tick-label layout of the dimension axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum XAxisDisplay {
    Hidden,
    #[default]
    Shown,
    Compact,
    Rotate45,
    Rotate90,
    /// Any other mode string. Treated as visible; tick geometry falls back to
    /// the single-line height with a diagnostic.
    Unrecognized(String),
}

impl XAxisDisplay {
    /// Maps a raw `graph.x_axis.axis_enabled` value. `None` means "use the default".
    #[must_use]
    pub fn parse_setting(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(false) => Some(Self::Hidden),
            Value::Bool(true) => Some(Self::Shown),
            Value::String(mode) => Some(match mode.as_str() {
                "" => Self::Hidden,
                "compact" => Self::Compact,
                "rotate-45" => Self::Rotate45,
                "rotate-90" => Self::Rotate90,
                other => Self::Unrecognized(other.to_owned()),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Immutable snapshot of the visualization options read by the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub stack_type: Option<StackType>,
    pub y_axis_auto_range: bool,
    pub y_axis_min: Option<f64>,
    pub y_axis_max: Option<f64>,
    pub x_axis_scale: XAxisScale,
    pub x_axis_display: XAxisDisplay,
    /// Kept tri-state: name-gap and grid reservation read an absent value differently.
    pub y_axis_labels_enabled: Option<bool>,
    pub y_axis_title_text: Option<String>,
    pub x_axis_title_text: Option<String>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            stack_type: None,
            y_axis_auto_range: true,
            y_axis_min: None,
            y_axis_max: None,
            x_axis_scale: XAxisScale::default(),
            x_axis_display: XAxisDisplay::default(),
            y_axis_labels_enabled: None,
            y_axis_title_text: None,
            x_axis_title_text: None,
        }
    }
}

impl ChartSettings {
    /// Parses a JSON object keyed by dotted setting names.
    ///
    /// Only a payload that is not a JSON object is rejected; individual
    /// malformed values are ignored and keep their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidSettings(format!("failed to parse settings: {e}")))?;
        let Value::Object(map) = value else {
            return Err(ChartError::InvalidSettings(
                "settings payload must be a JSON object".to_owned(),
            ));
        };
        Ok(Self::from_json_map(&map))
    }

    #[must_use]
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let defaults = Self::default();
        let settings = Self {
            stack_type: map
                .get(STACK_TYPE_KEY)
                .and_then(Value::as_str)
                .and_then(StackType::parse_setting),
            y_axis_auto_range: map
                .get(Y_AXIS_AUTO_RANGE_KEY)
                .and_then(Value::as_bool)
                .unwrap_or(defaults.y_axis_auto_range),
            y_axis_min: finite_number(map, Y_AXIS_MIN_KEY),
            y_axis_max: finite_number(map, Y_AXIS_MAX_KEY),
            x_axis_scale: map
                .get(X_AXIS_SCALE_KEY)
                .and_then(Value::as_str)
                .map_or(defaults.x_axis_scale, XAxisScale::parse_setting),
            x_axis_display: map
                .get(X_AXIS_ENABLED_KEY)
                .and_then(XAxisDisplay::parse_setting)
                .unwrap_or(defaults.x_axis_display),
            y_axis_labels_enabled: map.get(Y_AXIS_LABELS_ENABLED_KEY).and_then(Value::as_bool),
            y_axis_title_text: string_value(map, Y_AXIS_TITLE_TEXT_KEY),
            x_axis_title_text: string_value(map, X_AXIS_TITLE_TEXT_KEY),
        };
        debug!(
            keys = map.len(),
            x_axis_display = ?settings.x_axis_display,
            "parsed chart settings"
        );
        settings
    }

    #[must_use]
    pub fn with_stack_type(mut self, stack_type: StackType) -> Self {
        self.stack_type = Some(stack_type);
        self
    }

    #[must_use]
    pub fn with_auto_range(mut self, enabled: bool) -> Self {
        self.y_axis_auto_range = enabled;
        self
    }

    /// Sets custom Y bounds and switches auto range off.
    #[must_use]
    pub fn with_custom_y_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.y_axis_auto_range = false;
        self.y_axis_min = min;
        self.y_axis_max = max;
        self
    }

    #[must_use]
    pub fn with_x_axis_scale(mut self, scale: XAxisScale) -> Self {
        self.x_axis_scale = scale;
        self
    }

    #[must_use]
    pub fn with_x_axis_display(mut self, display: XAxisDisplay) -> Self {
        self.x_axis_display = display;
        self
    }

    #[must_use]
    pub fn with_y_axis_labels_enabled(mut self, enabled: bool) -> Self {
        self.y_axis_labels_enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_y_axis_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis_title_text = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_x_axis_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis_title_text = Some(title.into());
        self
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.stack_type == Some(StackType::Normalized)
    }
}

fn finite_number(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key)
        .and_then(Value::as_f64)
        .filter(|value| value.is_finite())
}

fn string_value(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_owned)
}
