//! Maps the generative service's JSON response onto a [`GradientConfig`].
//!
//! The payload is untrusted: every field is checked for presence and
//! primitive type before anything is built. Stops always receive fresh ids,
//! the service never supplies them.

use chromaflow_types::{
    clamp_offset, AnimationType, ColorStop, GradientConfig, GradientType, MAX_DURATION, MIN_STOPS,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AiGenerationError;

/// Angle used when the response leaves it out
pub const DEFAULT_ANGLE: f64 = 90.0;
/// Animation duration (seconds) used when the response leaves it out
pub const DEFAULT_DURATION: f64 = 10.0;

/// A configuration produced from a mood description, with display text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedGradient {
    pub config: GradientConfig,
    pub name: String,
    pub description: String,
}

/// Parse and validate raw response text.
///
/// Fails with [`AiGenerationError`] when the text is empty, is not JSON, or
/// does not match the gradient schema.
pub fn map_ai_response(text: &str) -> Result<GeneratedGradient, AiGenerationError> {
    if text.trim().is_empty() {
        return Err(AiGenerationError::EmptyResponse);
    }
    let value: Value = serde_json::from_str(text)?;
    map_ai_value(&value)
}

/// Validate an already-parsed response
pub fn map_ai_value(value: &Value) -> Result<GeneratedGradient, AiGenerationError> {
    let obj = value
        .as_object()
        .ok_or_else(|| AiGenerationError::payload("expected a JSON object"))?;

    let name = required_str(obj, "gradientName")?.to_string();
    let description = optional_str(obj, "description")?.unwrap_or_default().to_string();

    let type_name = required_str(obj, "type")?;
    let gradient_type = GradientType::from_name(type_name)
        .ok_or_else(|| AiGenerationError::payload(format!("unknown gradient type '{}'", type_name)))?;

    let angle = match optional_number(obj, "angle")? {
        Some(angle) => angle.clamp(0.0, 360.0),
        None => {
            log::debug!("AI response has no angle, using {}", DEFAULT_ANGLE);
            DEFAULT_ANGLE
        }
    };

    let animation = match optional_str(obj, "animation")? {
        Some(name) => AnimationType::from_name(name).ok_or_else(|| {
            AiGenerationError::payload(format!("unknown animation '{}'", name))
        })?,
        None => AnimationType::None,
    };

    let animation_duration = match optional_number(obj, "animationDuration")? {
        Some(d) if d > MAX_DURATION => {
            log::debug!("AI response duration {} exceeds {}, capping", d, MAX_DURATION);
            MAX_DURATION
        }
        Some(d) if d > 0.0 => d,
        Some(d) => {
            log::debug!("AI response duration {} is not positive, using {}", d, DEFAULT_DURATION);
            DEFAULT_DURATION
        }
        None => DEFAULT_DURATION,
    };

    let stops = map_stops(obj)?;

    Ok(GeneratedGradient {
        config: GradientConfig {
            gradient_type,
            angle,
            stops,
            animation,
            animation_duration,
        },
        name,
        description,
    })
}

fn map_stops(obj: &Map<String, Value>) -> Result<Vec<ColorStop>, AiGenerationError> {
    let raw = obj
        .get("stops")
        .ok_or_else(|| AiGenerationError::payload("missing field 'stops'"))?
        .as_array()
        .ok_or_else(|| AiGenerationError::payload("field 'stops' is not an array"))?;

    if raw.len() < MIN_STOPS {
        return Err(AiGenerationError::payload(format!(
            "expected at least {} stops, got {}",
            MIN_STOPS,
            raw.len()
        )));
    }

    raw.iter()
        .enumerate()
        .map(|(i, item)| {
            let stop = item
                .as_object()
                .ok_or_else(|| AiGenerationError::payload(format!("stop {} is not an object", i)))?;
            let color = stop
                .get("color")
                .and_then(Value::as_str)
                .ok_or_else(|| AiGenerationError::payload(format!("stop {} has no string 'color'", i)))?;
            let offset = stop
                .get("offset")
                .and_then(Value::as_f64)
                .ok_or_else(|| AiGenerationError::payload(format!("stop {} has no numeric 'offset'", i)))?;
            Ok(ColorStop::new(color, clamp_offset(offset)))
        })
        .collect()
}

fn required_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str, AiGenerationError> {
    optional_str(obj, key)?
        .ok_or_else(|| AiGenerationError::payload(format!("missing field '{}'", key)))
}

/// `null` counts as absent
fn optional_str<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>, AiGenerationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(AiGenerationError::payload(format!("field '{}' is not a string", key))),
    }
}

fn optional_number(obj: &Map<String, Value>, key: &str) -> Result<Option<f64>, AiGenerationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_f64()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| AiGenerationError::payload(format!("field '{}' is not a number", key))),
    }
}
