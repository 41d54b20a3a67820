//! Presentation primitives referenced by axis descriptors.
//!
//! The engine never draws; these values are handed to the rendering layer
//! unchanged.

mod primitives;

pub use primitives::{Color, FontStyle, LineStrokeStyle};
