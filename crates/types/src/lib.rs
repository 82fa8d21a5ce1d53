//! chromaflow-types: Gradient configuration model.
//!
//! Pure data types with no I/O: stops, gradient configuration, the stop
//! normalizer, and the immutable edit operations used by the editor.

pub mod color;
pub mod gradient;

pub use color::{clamp_offset, sorted_stops, ColorStop, StopId, MAX_OFFSET, MIN_OFFSET};
pub use gradient::{AnimationType, GradientConfig, GradientType, MAX_DURATION, MIN_STOPS};
