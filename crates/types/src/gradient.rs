//! Gradient configuration and its edit operations.
//!
//! Editing follows an immutable-update pattern: every `with_*` method borrows
//! the current configuration and returns a new one. Nothing is mutated in
//! place, so a snapshot handed to a formatter can never change under it.

use serde::{Deserialize, Serialize};

use crate::color::{clamp_offset, sorted_stops, ColorStop, StopId};

/// Minimum number of stops a configuration keeps
pub const MIN_STOPS: usize = 2;

pub const MIN_ANGLE: f64 = 0.0;
pub const MAX_ANGLE: f64 = 360.0;

/// Duration range offered by the editor, in seconds
pub const MIN_DURATION: f64 = 1.0;
pub const MAX_DURATION: f64 = 20.0;
/// Duration slider granularity
pub const DURATION_STEP: f64 = 0.5;

/// Color and offset used for stops added from the editor
pub const NEW_STOP_COLOR: &str = "#ffffff";
pub const NEW_STOP_OFFSET: f64 = 50.0;

/// Gradient geometry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
}

impl GradientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientType::Linear => "linear",
            GradientType::Radial => "radial",
        }
    }

    /// Parse the lowercase wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(GradientType::Linear),
            "radial" => Some(GradientType::Radial),
            _ => None,
        }
    }
}

/// Animation style applied to the SVG output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationType {
    #[default]
    None,
    /// Spin a linear gradient around its center
    Rotate,
    /// Breathe the radius of a radial gradient
    Pulse,
}

impl AnimationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationType::None => "none",
            AnimationType::Rotate => "rotate",
            AnimationType::Pulse => "pulse",
        }
    }

    /// Parse the lowercase wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(AnimationType::None),
            "rotate" => Some(AnimationType::Rotate),
            "pulse" => Some(AnimationType::Pulse),
            _ => None,
        }
    }
}

/// Full description of one gradient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradientConfig {
    #[serde(rename = "type")]
    pub gradient_type: GradientType,
    /// Degrees, only used by linear gradients
    pub angle: f64,
    /// Unsorted; renderers sort a copy
    pub stops: Vec<ColorStop>,
    pub animation: AnimationType,
    /// Seconds per animation cycle, only used when `animation` is not `None`
    pub animation_duration: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            gradient_type: GradientType::Linear,
            angle: 135.0,
            stops: vec![
                ColorStop::new("#ffffff", 0.0),
                ColorStop::new("#000000", 100.0),
            ],
            animation: AnimationType::None,
            animation_duration: 10.0,
        }
    }
}

impl GradientConfig {
    /// Stops sorted ascending by offset, the order every output uses
    pub fn sorted_stops(&self) -> Vec<ColorStop> {
        sorted_stops(&self.stops)
    }

    /// Look up a stop by id
    pub fn stop(&self, id: StopId) -> Option<&ColorStop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// True when a stop can be removed without breaking the minimum
    pub fn can_remove_stop(&self) -> bool {
        self.stops.len() > MIN_STOPS
    }

    pub fn with_type(&self, gradient_type: GradientType) -> Self {
        Self {
            gradient_type,
            ..self.clone()
        }
    }

    /// Set the angle, clamped to `[0, 360]`. Non-finite values are ignored.
    pub fn with_angle(&self, angle: f64) -> Self {
        if !angle.is_finite() {
            return self.clone();
        }
        Self {
            angle: angle.clamp(MIN_ANGLE, MAX_ANGLE) + 0.0,
            ..self.clone()
        }
    }

    pub fn with_animation(&self, animation: AnimationType) -> Self {
        Self {
            animation,
            ..self.clone()
        }
    }

    /// Set the animation duration, clamped to the editor range and snapped to
    /// half-second steps. Non-finite values are ignored.
    pub fn with_duration(&self, seconds: f64) -> Self {
        if !seconds.is_finite() {
            return self.clone();
        }
        let snapped = (seconds / DURATION_STEP).round() * DURATION_STEP;
        Self {
            animation_duration: snapped.clamp(MIN_DURATION, MAX_DURATION),
            ..self.clone()
        }
    }

    /// Append the editor's default stop (white at 50%)
    pub fn with_stop_added(&self) -> Self {
        self.with_stop_added_at(NEW_STOP_COLOR, NEW_STOP_OFFSET)
    }

    /// Append a stop with a fresh id
    pub fn with_stop_added_at(&self, color: impl Into<String>, offset: f64) -> Self {
        let mut stops = self.stops.clone();
        stops.push(ColorStop::new(color, clamp_offset(offset)));
        Self {
            stops,
            ..self.clone()
        }
    }

    /// Remove a stop.
    ///
    /// A no-op when only [`MIN_STOPS`] remain or when `id` is unknown.
    pub fn with_stop_removed(&self, id: StopId) -> Self {
        if !self.can_remove_stop() {
            log::debug!("refusing to remove stop {}: minimum of {} stops", id, MIN_STOPS);
            return self.clone();
        }
        Self {
            stops: self.stops.iter().filter(|s| s.id != id).cloned().collect(),
            ..self.clone()
        }
    }

    /// Change a stop's color. Unknown ids leave the configuration unchanged.
    pub fn with_stop_color(&self, id: StopId, color: impl Into<String>) -> Self {
        let color = color.into();
        self.map_stop(id, |stop| stop.color = color)
    }

    /// Move a stop, clamping the offset to `[0, 100]`.
    pub fn with_stop_offset(&self, id: StopId, offset: f64) -> Self {
        let offset = clamp_offset(offset);
        self.map_stop(id, |stop| stop.offset = offset)
    }

    fn map_stop(&self, id: StopId, edit: impl FnOnce(&mut ColorStop)) -> Self {
        let mut next = self.clone();
        if let Some(stop) = next.stops.iter_mut().find(|s| s.id == id) {
            edit(stop);
        }
        next
    }
}
