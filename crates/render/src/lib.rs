//! chromaflow-render: CSS and SVG text renderers for gradient configurations.
//!
//! Both renderers are pure functions of a borrowed [`GradientConfig`] and
//! consume the stops sorted ascending by offset.

pub mod css;
mod number;
pub mod svg;

use chromaflow_types::GradientConfig;
use serde::{Deserialize, Serialize};

pub use css::{css_declaration, css_stop_list, to_css};
pub use number::format_number;
pub use svg::{svg_stop_elements, to_svg, GRADIENT_ID};

/// Output format for export and clipboard copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Svg,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Svg => "svg",
        }
    }
}

/// Render a configuration in the requested format
pub fn render(config: &GradientConfig, format: ExportFormat) -> String {
    log::trace!("rendering {} gradient as {}", config.gradient_type.as_str(), format.as_str());
    match format {
        ExportFormat::Css => to_css(config),
        ExportFormat::Svg => to_svg(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromaflow_types::{ColorStop, GradientType};

    /// Pull `(color, offset)` pairs out of a CSS stop list
    fn css_pairs(css: &str) -> Vec<(String, String)> {
        let inner = css.split_once('(').unwrap().1.trim_end_matches(')');
        inner
            .split(", ")
            .skip(1)
            .map(|part| {
                let (color, offset) = part.rsplit_once(' ').unwrap();
                (color.to_string(), offset.trim_end_matches('%').to_string())
            })
            .collect()
    }

    /// Pull `(color, offset)` pairs out of the SVG stop elements
    fn svg_pairs(svg: &str) -> Vec<(String, String)> {
        svg.split("<stop ")
            .skip(1)
            .map(|chunk| {
                let offset = chunk.split("offset=\"").nth(1).unwrap().split('%').next().unwrap();
                let color = chunk.split("stop-color=\"").nth(1).unwrap().split('"').next().unwrap();
                (color.to_string(), offset.to_string())
            })
            .collect()
    }

    #[test]
    fn test_css_and_svg_agree_on_stops() {
        let config = GradientConfig {
            stops: vec![
                ColorStop::new("#aa0000", 70.0),
                ColorStop::new("#00aa00", 5.0),
                ColorStop::new("#0000aa", 33.5),
            ],
            ..GradientConfig::default()
        };

        for gradient_type in [GradientType::Linear, GradientType::Radial] {
            let config = config.with_type(gradient_type);
            let css = css_pairs(&render(&config, ExportFormat::Css));
            let svg = svg_pairs(&render(&config, ExportFormat::Svg));
            assert_eq!(css, svg);
            assert_eq!(css[0], ("#00aa00".to_string(), "5".to_string()));
            assert_eq!(css[2], ("#aa0000".to_string(), "70".to_string()));
        }
    }

    #[test]
    fn test_export_format_serialization() {
        let json = serde_json::to_string(&ExportFormat::Svg).unwrap();
        assert_eq!(json, "\"svg\"");
    }
}
