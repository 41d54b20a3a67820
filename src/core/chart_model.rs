use serde::{Deserialize, Serialize};

use crate::core::{AxisValue, Datum, Extent};
use crate::error::{ChartError, ChartResult};

static MISSING_VALUE: AxisValue = AxisValue::Null;

/// Identifies the column that supplies X values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionModel {
    /// Row key holding the dimension value.
    pub data_key: String,
    /// `true` when the dimension column holds numbers.
    pub numeric: bool,
}

impl DimensionModel {
    #[must_use]
    pub fn new(data_key: impl Into<String>, numeric: bool) -> Self {
        Self {
            data_key: data_key.into(),
            numeric,
        }
    }
}

/// Observed data extents for the left and right metric axis slots.
///
/// A `None` slot means that axis is unused.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YAxisExtents {
    pub left: Option<Extent>,
    pub right: Option<Extent>,
}

impl YAxisExtents {
    #[must_use]
    pub const fn new(left: Option<Extent>, right: Option<Extent>) -> Self {
        Self { left, right }
    }
}

/// Computed chart data model consumed by the layout engine.
///
/// Built once per computation pass and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModel {
    pub dataset: Vec<Datum>,
    pub dimension_model: DimensionModel,
    pub y_axis_extents: YAxisExtents,
}

impl ChartModel {
    #[must_use]
    pub fn new(dataset: Vec<Datum>, dimension_model: DimensionModel) -> Self {
        Self {
            dataset,
            dimension_model,
            y_axis_extents: YAxisExtents::default(),
        }
    }

    /// Parses dataset rows from a JSON array of objects.
    pub fn from_json_rows(input: &str, dimension_model: DimensionModel) -> ChartResult<Self> {
        let dataset: Vec<Datum> = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset rows: {e}")))?;
        Ok(Self::new(dataset, dimension_model))
    }

    #[must_use]
    pub fn with_left_extent(mut self, extent: Extent) -> Self {
        self.y_axis_extents.left = Some(extent);
        self
    }

    #[must_use]
    pub fn with_right_extent(mut self, extent: Extent) -> Self {
        self.y_axis_extents.right = Some(extent);
        self
    }

    /// Dimension value of every row in dataset order.
    ///
    /// Rows missing the dimension key yield `AxisValue::Null`.
    pub fn dimension_values(&self) -> impl Iterator<Item = &AxisValue> + '_ {
        self.dataset.iter().map(|datum| self.dimension_value(datum))
    }

    /// Dimension value of one row, `AxisValue::Null` when the key is missing.
    #[must_use]
    pub fn dimension_value<'a>(&self, datum: &'a Datum) -> &'a AxisValue {
        datum
            .get(self.dimension_model.data_key.as_str())
            .unwrap_or(&MISSING_VALUE)
    }
}
