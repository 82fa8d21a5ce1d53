//! Color stops and stop identity.
//!
//! A stop is a (color, offset) anchor of a gradient. Colors are kept as the
//! literal strings the user or the AI service supplied; nothing here parses
//! or validates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Smallest allowed stop offset (percent)
pub const MIN_OFFSET: f64 = 0.0;
/// Largest allowed stop offset (percent)
pub const MAX_OFFSET: f64 = 100.0;

/// Opaque identifier of a stop within one gradient configuration.
///
/// Only meaningful for telling stops apart while editing a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(Uuid);

impl StopId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StopId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Color stop for gradients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorStop {
    pub id: StopId,
    /// Hex color literal, e.g. `#ff00aa`
    pub color: String,
    /// Position along the gradient, 0 to 100
    pub offset: f64,
}

impl ColorStop {
    /// Create a stop with a freshly generated id
    pub fn new(color: impl Into<String>, offset: f64) -> Self {
        Self {
            id: StopId::new(),
            color: color.into(),
            offset,
        }
    }
}

/// Clamp an offset into `[0, 100]`.
///
/// Non-finite input collapses to 0.
pub fn clamp_offset(offset: f64) -> f64 {
    if offset.is_finite() {
        // `+ 0.0` turns -0.0 into 0.0
        offset.clamp(MIN_OFFSET, MAX_OFFSET) + 0.0
    } else {
        MIN_OFFSET
    }
}

/// Return a copy of `stops` sorted ascending by offset.
///
/// The sort is stable: stops sharing an offset keep their relative order.
/// The input is never modified.
pub fn sorted_stops(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut sorted = stops.to_vec();
    sorted.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    sorted
}
