pub mod chart_model;
pub mod types;

pub use chart_model::{ChartModel, DimensionModel, YAxisExtents};
pub use types::{AxisValue, Datum, Extent};
