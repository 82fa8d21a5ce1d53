//! Animated SVG output
//!
//! Produces a 100x100 document holding one gradient definition (`grad1`) and
//! one rectangle filled with it. Animation fragments are chosen per gradient
//! type:
//!
//! | type   | animation | fragment                              |
//! |--------|-----------|---------------------------------------|
//! | linear | rotate    | indefinite 0→360° `animateTransform`  |
//! | linear | other     | frozen 1s `animateTransform` at angle |
//! | radial | pulse     | `animate` on `r`, 0.5 → 0.8 → 0.5     |
//! | radial | other     | nothing                               |
//!
//! A fragment that does not apply is written as an empty string on its own
//! line, so the output may contain blank lines but never a dangling tag.

use std::fmt::Write;

use chromaflow_types::{AnimationType, ColorStop, GradientConfig, GradientType};

use crate::number::format_number;

/// Id shared by the gradient definition and the rect fill
pub const GRADIENT_ID: &str = "grad1";

const SVG_OPEN: &str =
    r#"<svg width="100%" height="100%" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">"#;

/// Escape the XML special characters for use inside an attribute value.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// One `<stop>` element per already-sorted stop, joined for the template indent
pub fn svg_stop_elements(stops: &[ColorStop]) -> String {
    stops
        .iter()
        .map(|s| {
            format!(
                r#"<stop offset="{}%" stop-color="{}" />"#,
                format_number(s.offset),
                xml_escape(&s.color)
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

/// Indefinite full turn around the gradient center
fn rotate_animation(duration: f64) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "\n      <animateTransform \
         \n        attributeName=\"gradientTransform\" \
         \n        type=\"rotate\" \
         \n        from=\"0 .5 .5\" \
         \n        to=\"360 .5 .5\" \
         \n        dur=\"{}s\" \
         \n        repeatCount=\"indefinite\" \
         \n      />",
        format_number(duration)
    );
    out
}

/// Radius breathing for radial gradients
fn pulse_animation(duration: f64) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "\n       <animate \
         \n         attributeName=\"r\" \
         \n         values=\"0.5; 0.8; 0.5\" \
         \n         dur=\"{}s\" \
         \n         repeatCount=\"indefinite\" \
         \n       />",
        format_number(duration)
    );
    out
}

/// Linear gradients run left to right, so a fixed angle is expressed as a
/// rotate transform frozen at that angle.
fn static_angle_transform(angle: f64) -> String {
    let angle = format_number(angle);
    format!(
        r#"<animateTransform attributeName="gradientTransform" type="rotate" from="{angle} .5 .5" to="{angle} .5 .5" dur="1s" fill="freeze" />"#
    )
}

/// Render the SVG document for a configuration
pub fn to_svg(config: &GradientConfig) -> String {
    let stops = svg_stop_elements(&config.sorted_stops());
    let mut out = String::new();

    let _ = writeln!(out, "{}", SVG_OPEN);
    let _ = writeln!(out, "  <defs>");

    match config.gradient_type {
        GradientType::Radial => {
            let pulse = match config.animation {
                AnimationType::Pulse => pulse_animation(config.animation_duration),
                _ => String::new(),
            };
            let _ = writeln!(
                out,
                r#"    <radialGradient id="{}" cx="50%" cy="50%" r="50%" fx="50%" fy="50%">"#,
                GRADIENT_ID
            );
            let _ = writeln!(out, "      {}", stops);
            let _ = writeln!(out, "      {}", pulse);
            let _ = writeln!(out, "    </radialGradient>");
        }
        GradientType::Linear => {
            let (rotate, fixed) = match config.animation {
                AnimationType::Rotate => (rotate_animation(config.animation_duration), String::new()),
                _ => (String::new(), static_angle_transform(config.angle)),
            };
            let _ = writeln!(
                out,
                r#"    <linearGradient id="{}" x1="0%" y1="50%" x2="100%" y2="50%">"#,
                GRADIENT_ID
            );
            let _ = writeln!(out, "      {}", stops);
            let _ = writeln!(out, "      {}", rotate);
            let _ = writeln!(out, "      {}", fixed);
            let _ = writeln!(out, "    </linearGradient>");
        }
    }

    let _ = writeln!(out, "  </defs>");
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="100" height="100" fill="url(#{})" />"#,
        GRADIENT_ID
    );
    out.push_str("</svg>");
    out
}
