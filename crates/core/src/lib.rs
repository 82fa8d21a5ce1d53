//! chromaflow-core: AI response mapping, request gating and the editor session.
//!
//! This crate sits between the pure model (`chromaflow-types`), the
//! renderers (`chromaflow-render`) and whatever backend talks to the
//! generative service (`chromaflow-sources`).

pub mod clipboard;
mod editor;
pub mod error;
mod generator;
pub mod mapper;
pub mod schema;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use editor::{EditAction, Editor};
pub use error::{AiGenerationError, ClipboardError};
pub use generator::{generate_gradient, AiStudio, GenerationGate, GenerationGuard, GradientGenerator};
pub use mapper::{map_ai_response, map_ai_value, GeneratedGradient, DEFAULT_ANGLE, DEFAULT_DURATION};
pub use schema::{gradient_schema, mood_prompt};

// Re-export the model and renderers so front ends need a single dependency
pub use chromaflow_render::{css_declaration, render, to_css, to_svg, ExportFormat};
pub use chromaflow_types::{AnimationType, ColorStop, GradientConfig, GradientType, StopId};
