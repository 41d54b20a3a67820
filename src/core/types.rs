use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// True `(min, max)` span of a data series along one axis.
///
/// Deserialization goes through [`Extent::new`], so a decoded extent upholds
/// the same invariants as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExtent")]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Builds a validated extent.
    ///
    /// Invariants:
    /// - both bounds are finite
    /// - `min <= max`
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "extent bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(format!(
                "extent min must be <= max (min={min}, max={max})"
            )));
        }
        Ok(Self { min, max })
    }
}

#[derive(Deserialize)]
struct RawExtent {
    min: f64,
    max: f64,
}

impl TryFrom<RawExtent> for Extent {
    type Error = ChartError;

    fn try_from(raw: RawExtent) -> ChartResult<Self> {
        Self::new(raw.min, raw.max)
    }
}

/// A single cell value as seen by axis formatters.
///
/// Deserialized untagged so dataset rows can be read straight from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum AxisValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AxisValue {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Null | Self::Bool(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Null | Self::Number(_) | Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Null | Self::Bool(_) | Self::Number(_) => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(""),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for AxisValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AxisValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AxisValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for AxisValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AxisValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One dataset row keyed by column data key.
///
/// `IndexMap` keeps column order stable across serialization round trips.
pub type Datum = IndexMap<String, AxisValue>;
