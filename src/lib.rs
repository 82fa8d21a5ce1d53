//! chromaflow: gradient design tool
//!
//! This library provides the front end pieces of chromaflow:
//! - Command line parsing
//! - Tool settings
//! - The platform clipboard backend
//!
//! Gradient modelling, rendering and AI mapping live in the workspace crates.

pub mod cli;
pub mod clipboard;
pub mod config;

// Re-export commonly used types
pub use config::{AiSettings, AppSettings};
