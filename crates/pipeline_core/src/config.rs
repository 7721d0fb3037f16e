use std::{fs, path::Path};

use serde::Deserialize;

pub const DEFAULT_ENDPOINT_URL: &str = "https://fetch-hiring.s3.amazonaws.com/hiring.json";
const SETTINGS_FILE: &str = "pipeline.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.into(),
        }
    }
}

/// Defaults, then `pipeline.toml` in the working directory, then
/// `PIPELINE_ENDPOINT_URL`, then `APP__ENDPOINT_URL`.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.endpoint_url.as_deref().and_then(non_blank) {
                settings.endpoint_url = v;
            }
        }
    }

    for key in ["PIPELINE_ENDPOINT_URL", "APP__ENDPOINT_URL"] {
        if let Some(v) = env(key).as_deref().and_then(non_blank) {
            settings.endpoint_url = v;
        }
    }

    settings
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
