//! cartesian-axis-layout: axis and plot-area layout for cartesian charts.
//!
//! The engine turns a computed chart model and a settings snapshot into a
//! declarative axis/grid configuration. It never draws and never fails:
//! malformed settings fall back to automatic behavior.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{CartesianLayout, ChartSettings, build_axes, build_cartesian_layout};
pub use error::{ChartError, ChartResult};
