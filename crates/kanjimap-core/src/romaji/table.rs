pub(super) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// Returns the embedded default (Hepburn) kana table as TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
