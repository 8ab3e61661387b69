//! Export settings loaded from TOML.
//!
//! Defaults are embedded via `include_str!("default_settings.toml")`. Settings
//! are parsed once at startup and handed to the components that need them.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Placeholder substituted by the grade number in `export.file_pattern`.
pub const GRADE_PLACEHOLDER: &str = "{grade}";

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub source: SourceSettings,
    pub pacing: PacingSettings,
    pub retry: RetrySettings,
    pub selection: SelectionSettings,
    pub export: ExportSettings,
}

impl Settings {
    /// The embedded defaults.
    pub fn defaults() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PacingSettings {
    pub delay_ms: u64,
    pub progress_interval: usize,
}

impl PacingSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub delays_ms: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionSettings {
    pub max_readings: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    pub grades: Vec<u8>,
    pub file_pattern: String,
}

impl ExportSettings {
    /// Output file name for `grade`.
    pub fn file_name(&self, grade: u8) -> String {
        self.file_pattern.replace(GRADE_PLACEHOLDER, &grade.to_string())
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate a grade list: non-empty, no zero, no duplicates.
pub fn validate_grades(grades: &[u8]) -> Result<(), SettingsError> {
    if grades.is_empty() {
        return Err(invalid("export.grades", "must not be empty"));
    }
    if grades.contains(&0) {
        return Err(invalid("export.grades", "grades start at 1"));
    }
    let mut seen = HashSet::new();
    if let Some(dup) = grades.iter().find(|g| !seen.insert(**g)) {
        return Err(SettingsError::InvalidValue {
            field: "export.grades".to_string(),
            reason: format!("grade {dup} listed twice"),
        });
    }
    Ok(())
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let url = &s.source.base_url;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(invalid("source.base_url", "must be an http(s) URL"));
    }
    if s.source.timeout_secs == 0 {
        return Err(invalid("source.timeout_secs", "must be positive"));
    }
    if s.retry.max_attempts == 0 {
        return Err(invalid("retry.max_attempts", "must be at least 1"));
    }
    if s.selection.max_readings == 0 {
        return Err(invalid("selection.max_readings", "must be at least 1"));
    }
    validate_grades(&s.export.grades)?;
    if !s.export.file_pattern.contains(GRADE_PLACEHOLDER) {
        return Err(invalid(
            "export.file_pattern",
            "must contain {grade} so grades do not overwrite each other",
        ));
    }
    Ok(())
}
