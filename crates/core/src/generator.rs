//! Generative service contract and the single-slot request gate.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::AiGenerationError;
use crate::mapper::{map_ai_response, GeneratedGradient};

/// External collaborator turning a mood description into raw JSON text.
///
/// Implementations own transport and authentication. They return the text
/// the service produced; validation happens in [`map_ai_response`].
#[async_trait]
pub trait GradientGenerator: Send + Sync {
    /// Short identifier used in logs (e.g. "gemini")
    fn id(&self) -> &str;

    /// Ask the service for a gradient matching `prompt`
    async fn generate_raw(&self, prompt: &str) -> Result<String, AiGenerationError>;
}

/// Run the collaborator and map its answer
pub async fn generate_gradient(
    generator: &dyn GradientGenerator,
    prompt: &str,
) -> Result<GeneratedGradient, AiGenerationError> {
    let text = generator.generate_raw(prompt).await?;
    map_ai_response(&text)
}

/// Busy flag allowing at most one outstanding generation.
///
/// Attempts made while a request is in flight are rejected, never queued.
#[derive(Debug, Default)]
pub struct GenerationGate {
    busy: AtomicBool,
}

impl GenerationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot, or `None` if a request already holds it
    pub fn try_acquire(&self) -> Option<GenerationGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GenerationGuard { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Holds the gate's slot; releases it on drop whatever the outcome
#[derive(Debug)]
pub struct GenerationGuard<'a> {
    gate: &'a GenerationGate,
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

/// A generator paired with its request gate
pub struct AiStudio<G: GradientGenerator> {
    generator: G,
    gate: GenerationGate,
}

impl<G: GradientGenerator> AiStudio<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            gate: GenerationGate::new(),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// True while a generation is outstanding; presentation disables the
    /// generate control while this holds.
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Generate a gradient for `prompt`.
    ///
    /// Returns [`AiGenerationError::Busy`] if another call has not resolved yet.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedGradient, AiGenerationError> {
        let _guard = self.gate.try_acquire().ok_or(AiGenerationError::Busy)?;

        log::info!("requesting gradient from {}", self.generator.id());
        let result = generate_gradient(&self.generator, prompt).await;

        match &result {
            Ok(generated) => log::info!("generated gradient '{}'", generated.name),
            Err(e) => log::warn!("AI generation failed: {}", e),
        }
        result
    }
}
