//! Response schema and prompt wording sent to the generative service.

use serde_json::{json, Value};

/// Structured-output schema the service is asked to follow.
///
/// Field names here are the ones [`crate::mapper::map_ai_response`] reads.
pub fn gradient_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "gradientName": { "type": "STRING", "description": "A creative name for the gradient" },
            "description": { "type": "STRING", "description": "Short explanation of the color choices" },
            "type": { "type": "STRING", "enum": ["linear", "radial"] },
            "angle": { "type": "INTEGER", "description": "Angle in degrees (0-360) if linear, default 90" },
            "animation": {
                "type": "STRING",
                "enum": ["none", "rotate", "pulse"],
                "description": "Suggested animation style"
            },
            "animationDuration": {
                "type": "NUMBER",
                "description": "Suggested animation duration in seconds (3-20)"
            },
            "stops": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "color": { "type": "STRING", "description": "Hex color code e.g., #FF0000" },
                        "offset": { "type": "INTEGER", "description": "Position 0-100" }
                    },
                    "required": ["color", "offset"]
                }
            }
        },
        "required": ["gradientName", "type", "stops", "angle"]
    })
}

/// Instruction text wrapping the user's mood description
pub fn mood_prompt(mood: &str) -> String {
    format!(
        "Generate a beautiful CSS/SVG gradient based on this description: \"{}\". \n\
         Ensure colors are harmonious and accessible. \n\
         If the user mentions a specific style (cyberpunk, pastel, nature), match it strictly.",
        mood
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_core_fields() {
        let schema = gradient_schema();
        let required: Vec<_> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required, vec!["gradientName", "type", "stops", "angle"]);
        assert_eq!(schema["properties"]["stops"]["items"]["required"][0], "color");
    }

    #[test]
    fn test_mood_prompt_embeds_description() {
        let prompt = mood_prompt("misty forest at dawn");
        assert!(prompt.contains("\"misty forest at dawn\""));
        assert!(prompt.starts_with("Generate a beautiful CSS/SVG gradient"));
    }
}
