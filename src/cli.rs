//! Command line interface

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use chromaflow_core::{AnimationType, ColorStop, ExportFormat, GradientConfig, GradientType};

/// chromaflow - design CSS and animated SVG gradients
#[derive(Parser, Debug, Clone)]
#[command(name = "chromaflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0", global = true)]
    pub debug: u8,

    /// Settings file to use instead of the platform default
    #[arg(long = "settings", value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the CSS gradient
    Css {
        #[command(flatten)]
        gradient: GradientArgs,

        /// Print a full `background: ...;` declaration
        #[arg(long)]
        declaration: bool,

        /// Also copy the output to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Print the SVG document
    Svg {
        #[command(flatten)]
        gradient: GradientArgs,

        /// Also copy the output to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Generate a gradient from a mood description with the AI backend
    Generate {
        /// Mood description, e.g. "foggy harbour at dawn"
        #[arg(value_name = "PROMPT")]
        prompt: String,

        /// Output format: css, svg or json
        #[arg(long, value_name = "FORMAT", default_value = "css", value_parser = parse_output_format)]
        format: OutputFormat,

        /// Also copy the output to the clipboard (css or svg only)
        #[arg(long)]
        copy: bool,
    },
    /// Show the active settings
    Config {
        /// Write the default settings file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Output of the `generate` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Export(ExportFormat),
    Json,
}

/// Gradient options shared by the `css` and `svg` commands
#[derive(Args, Debug, Clone, Default)]
pub struct GradientArgs {
    /// Gradient type: linear or radial
    #[arg(long = "type", value_name = "TYPE", value_parser = parse_gradient_type)]
    pub gradient_type: Option<GradientType>,

    /// Angle in degrees (linear only)
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Animation: none, rotate (linear) or pulse (radial)
    #[arg(long, value_name = "ANIMATION", value_parser = parse_animation)]
    pub animation: Option<AnimationType>,

    /// Animation duration in seconds
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Color stop as COLOR@OFFSET, e.g. "#ff0080@25" (repeat, at least two)
    #[arg(long = "stop", value_name = "COLOR@OFFSET", value_parser = parse_stop)]
    pub stops: Vec<StopArg>,
}

/// A parsed `--stop` value
#[derive(Debug, Clone, PartialEq)]
pub struct StopArg {
    pub color: String,
    pub offset: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum StopArgError {
    #[error("expected COLOR@OFFSET, got '{0}'")]
    MissingSeparator(String),

    #[error("invalid offset '{0}': expected a number between 0 and 100")]
    InvalidOffset(String),

    #[error("a gradient needs at least two stops, got {0}")]
    TooFewStops(usize),
}

impl GradientArgs {
    /// Build a configuration: defaults first, then each given option applied
    /// as an edit.
    pub fn to_config(&self) -> Result<GradientConfig, StopArgError> {
        let mut config = GradientConfig::default();

        if !self.stops.is_empty() {
            if self.stops.len() < chromaflow_types::MIN_STOPS {
                return Err(StopArgError::TooFewStops(self.stops.len()));
            }
            config.stops = self
                .stops
                .iter()
                .map(|s| ColorStop::new(s.color.clone(), chromaflow_types::clamp_offset(s.offset)))
                .collect();
        }
        if let Some(t) = self.gradient_type {
            config = config.with_type(t);
        }
        if let Some(angle) = self.angle {
            config = config.with_angle(angle);
        }
        if let Some(animation) = self.animation {
            config = config.with_animation(animation);
        }
        if let Some(duration) = self.duration {
            config = config.with_duration(duration);
        }
        Ok(config)
    }
}

fn parse_gradient_type(s: &str) -> Result<GradientType, String> {
    GradientType::from_name(&s.to_ascii_lowercase())
        .ok_or_else(|| format!("expected linear or radial, got: {}", s))
}

fn parse_animation(s: &str) -> Result<AnimationType, String> {
    AnimationType::from_name(&s.to_ascii_lowercase())
        .ok_or_else(|| format!("expected none, rotate or pulse, got: {}", s))
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "css" => Ok(OutputFormat::Export(ExportFormat::Css)),
        "svg" => Ok(OutputFormat::Export(ExportFormat::Svg)),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("expected css, svg or json, got: {}", s)),
    }
}

/// Parse "COLOR@OFFSET"; a trailing `%` on the offset is accepted
pub fn parse_stop(s: &str) -> Result<StopArg, StopArgError> {
    let (color, offset) = s
        .rsplit_once('@')
        .ok_or_else(|| StopArgError::MissingSeparator(s.to_string()))?;
    let color = color.trim();
    if color.is_empty() {
        return Err(StopArgError::MissingSeparator(s.to_string()));
    }

    let raw = offset.trim().trim_end_matches('%');
    let offset: f64 = raw
        .parse()
        .map_err(|_| StopArgError::InvalidOffset(offset.to_string()))?;
    if !(0.0..=100.0).contains(&offset) {
        return Err(StopArgError::InvalidOffset(offset.to_string()));
    }

    Ok(StopArg {
        color: color.to_string(),
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stop() {
        assert_eq!(
            parse_stop("#ff0080@25").unwrap(),
            StopArg { color: "#ff0080".to_string(), offset: 25.0 }
        );
        assert_eq!(parse_stop("#000@12.5%").unwrap().offset, 12.5);
        assert!(matches!(parse_stop("#fff"), Err(StopArgError::MissingSeparator(_))));
        assert!(matches!(parse_stop("@50"), Err(StopArgError::MissingSeparator(_))));
        assert!(matches!(parse_stop("#fff@abc"), Err(StopArgError::InvalidOffset(_))));
        assert!(matches!(parse_stop("#fff@101"), Err(StopArgError::InvalidOffset(_))));
    }

    #[test]
    fn test_css_command_parses_gradient_options() {
        let cli = Cli::try_parse_from([
            "chromaflow", "css", "--type", "radial", "--stop", "#111111@80", "--stop", "#222222@10",
        ])
        .unwrap();

        match cli.command {
            Command::Css { gradient, declaration, copy } => {
                assert!(!declaration);
                assert!(!copy);
                let config = gradient.to_config().unwrap();
                assert_eq!(config.gradient_type, GradientType::Radial);
                assert_eq!(config.stops.len(), 2);
                assert_eq!(
                    chromaflow_core::to_css(&config),
                    "radial-gradient(circle, #222222 10%, #111111 80%)"
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_defaults_without_options() {
        let config = GradientArgs::default().to_config().unwrap();
        assert_eq!(config.gradient_type, GradientType::Linear);
        assert_eq!(config.angle, 135.0);
        assert_eq!(config.animation, AnimationType::None);
        assert_eq!(config.stops.len(), 2);
    }

    #[test]
    fn test_single_stop_rejected() {
        let args = GradientArgs {
            stops: vec![StopArg { color: "#fff".to_string(), offset: 0.0 }],
            ..GradientArgs::default()
        };
        assert_eq!(args.to_config(), Err(StopArgError::TooFewStops(1)));
    }

    #[test]
    fn test_generate_command() {
        let cli = Cli::try_parse_from(["chromaflow", "-d", "2", "generate", "neon rain", "--format", "json"])
            .unwrap();
        assert_eq!(cli.debug, 2);
        match cli.command {
            Command::Generate { prompt, format, copy } => {
                assert_eq!(prompt, "neon rain");
                assert_eq!(format, OutputFormat::Json);
                assert!(!copy);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_animation_rejected() {
        assert!(Cli::try_parse_from(["chromaflow", "svg", "--animation", "spin"]).is_err());
    }
}
