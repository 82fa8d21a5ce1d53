//! Configuration management

mod defaults;
mod settings;

pub use settings::{AiSettings, AppSettings};
