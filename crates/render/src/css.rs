//! CSS gradient output
//!
//! Colors are written verbatim; a malformed color string ends up in the
//! output exactly as it was given.

use chromaflow_types::{ColorStop, GradientConfig, GradientType};

use crate::number::format_number;

/// Build the `"<color> <offset>%"` list for already-sorted stops
pub fn css_stop_list(stops: &[ColorStop]) -> String {
    stops
        .iter()
        .map(|s| format!("{} {}%", s.color, format_number(s.offset)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the CSS gradient function call for a configuration
///
/// Linear: `linear-gradient(<angle>deg, <stops>)`.
/// Radial: `radial-gradient(circle, <stops>)`.
pub fn to_css(config: &GradientConfig) -> String {
    let stops = css_stop_list(&config.sorted_stops());
    match config.gradient_type {
        GradientType::Radial => format!("radial-gradient(circle, {})", stops),
        GradientType::Linear => {
            format!("linear-gradient({}deg, {})", format_number(config.angle), stops)
        }
    }
}

/// Render a complete `background` declaration ready to paste into a rule
pub fn css_declaration(config: &GradientConfig) -> String {
    format!("background: {};", to_css(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaflow_types::ColorStop;

    fn config_with(stops: Vec<ColorStop>) -> GradientConfig {
        GradientConfig {
            stops,
            ..GradientConfig::default()
        }
    }

    #[test]
    fn test_default_linear() {
        let css = to_css(&GradientConfig::default());
        assert_eq!(css, "linear-gradient(135deg, #ffffff 0%, #000000 100%)");
    }

    #[test]
    fn test_radial_ignores_angle() {
        let config = GradientConfig::default()
            .with_type(GradientType::Radial)
            .with_angle(45.0);
        assert_eq!(
            to_css(&config),
            "radial-gradient(circle, #ffffff 0%, #000000 100%)"
        );
    }

    #[test]
    fn test_stops_sorted_before_rendering() {
        let config = config_with(vec![
            ColorStop::new("#ff0000", 80.0),
            ColorStop::new("#00ff00", 10.0),
        ])
        .with_angle(90.0);
        assert_eq!(
            to_css(&config),
            "linear-gradient(90deg, #00ff00 10%, #ff0000 80%)"
        );
    }

    #[test]
    fn test_fractional_offsets() {
        let config = config_with(vec![
            ColorStop::new("#010203", 12.5),
            ColorStop::new("#040506", 87.5),
        ]);
        assert!(to_css(&config).contains("#010203 12.5%, #040506 87.5%"));
    }

    #[test]
    fn test_malformed_color_passes_through() {
        let config = config_with(vec![
            ColorStop::new("not-a-color", 0.0),
            ColorStop::new("#zzz", 100.0),
        ]);
        assert!(to_css(&config).contains("not-a-color 0%, #zzz 100%"));
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            css_declaration(&GradientConfig::default()),
            "background: linear-gradient(135deg, #ffffff 0%, #000000 100%);"
        );
    }
}
