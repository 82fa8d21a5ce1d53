//! Editor session holding the current gradient.
//!
//! Each user action is an [`EditAction`] that maps the current configuration
//! to a new one; the session swaps in the result. AI results replace the
//! configuration only when generation succeeded.

use chromaflow_render::{render, ExportFormat};
use chromaflow_types::{AnimationType, GradientConfig, GradientType, StopId};

use crate::clipboard::Clipboard;
use crate::error::{AiGenerationError, ClipboardError};
use crate::mapper::GeneratedGradient;

/// A discrete user edit
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    SetType(GradientType),
    SetAngle(f64),
    SetAnimation(AnimationType),
    SetDuration(f64),
    AddStop,
    RemoveStop(StopId),
    SetStopColor(StopId, String),
    SetStopOffset(StopId, f64),
}

impl EditAction {
    /// Produce the configuration that results from applying this action
    pub fn apply(&self, config: &GradientConfig) -> GradientConfig {
        match self {
            EditAction::SetType(t) => config.with_type(*t),
            EditAction::SetAngle(a) => config.with_angle(*a),
            EditAction::SetAnimation(a) => config.with_animation(*a),
            EditAction::SetDuration(d) => config.with_duration(*d),
            EditAction::AddStop => config.with_stop_added(),
            EditAction::RemoveStop(id) => config.with_stop_removed(*id),
            EditAction::SetStopColor(id, color) => config.with_stop_color(*id, color.clone()),
            EditAction::SetStopOffset(id, offset) => config.with_stop_offset(*id, *offset),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    config: GradientConfig,
    /// Name/description of the last AI result, cleared by manual edits
    generated_name: Option<String>,
    generated_description: Option<String>,
}

impl Editor {
    pub fn new(config: GradientConfig) -> Self {
        Self {
            config,
            generated_name: None,
            generated_description: None,
        }
    }

    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    pub fn generated_name(&self) -> Option<&str> {
        self.generated_name.as_deref()
    }

    pub fn generated_description(&self) -> Option<&str> {
        self.generated_description.as_deref()
    }

    pub fn dispatch(&mut self, action: EditAction) -> &GradientConfig {
        self.config = action.apply(&self.config);
        self.generated_name = None;
        self.generated_description = None;
        &self.config
    }

    pub fn apply_generated(&mut self, generated: GeneratedGradient) {
        self.config = generated.config;
        self.generated_name = Some(generated.name);
        self.generated_description = Some(generated.description);
    }

    /// Apply a generation outcome; on error the configuration is unchanged
    /// and the error is handed back for the failure notification.
    pub fn apply_generation_result(
        &mut self,
        result: Result<GeneratedGradient, AiGenerationError>,
    ) -> Result<(), AiGenerationError> {
        let generated = result?;
        self.apply_generated(generated);
        Ok(())
    }

    pub fn css(&self) -> String {
        self.export(ExportFormat::Css)
    }

    pub fn svg(&self) -> String {
        self.export(ExportFormat::Svg)
    }

    pub fn export(&self, format: ExportFormat) -> String {
        render(&self.config, format)
    }

    /// Put the current CSS or SVG text on `clipboard`
    pub fn copy(
        &self,
        format: ExportFormat,
        clipboard: &mut dyn Clipboard,
    ) -> Result<(), ClipboardError> {
        let text = self.export(format);
        clipboard.set_text(&text)?;
        log::info!("copied {} ({} bytes) to clipboard", format.as_str(), text.len());
        Ok(())
    }
}
