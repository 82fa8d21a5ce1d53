//! Default values for settings fields

pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

pub fn model() -> String {
    chromaflow_sources::DEFAULT_MODEL.to_string()
}

pub fn base_url() -> String {
    chromaflow_sources::DEFAULT_BASE_URL.to_string()
}

pub fn api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

pub fn log_level() -> String {
    "warn".to_string()
}

pub fn clipboard_hold_secs() -> u64 {
    10
}
