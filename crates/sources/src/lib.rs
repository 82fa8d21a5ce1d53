//! chromaflow-sources: Backends that produce gradients from a mood description.

mod gemini;

pub use gemini::{GeminiGenerator, DEFAULT_BASE_URL, DEFAULT_MODEL};
