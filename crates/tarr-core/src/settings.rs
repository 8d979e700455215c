//! Global settings loaded from TOML, following the same OnceLock pattern as the script map.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

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
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub search: SearchSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub max_results: usize,
    pub max_input_chars: usize,
    pub max_candidates: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub api_version: String,
    pub timeout_secs: u64,
    pub unpriced_label: String,
}

impl CatalogSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.trim().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_positive!(search.max_results);
    check_positive!(search.max_input_chars);
    check_positive!(search.max_candidates);

    check_non_empty!(catalog.api_version);
    check_positive!(catalog.timeout_secs);
    check_non_empty!(catalog.unpriced_label);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.search.max_results, 3);
        assert_eq!(s.search.max_input_chars, 48);
        assert_eq!(s.search.max_candidates, 1024);
        assert_eq!(s.catalog.api_version, "wc/v3");
        assert_eq!(s.catalog.timeout(), Duration::from_secs(10));
        assert_eq!(s.catalog.unpriced_label, "չի նշված");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[search]
max_results = 5
max_input_chars = 20
max_candidates = 64

[catalog]
api_version = "wc/v2"
timeout_secs = 3
unpriced_label = "n/a"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.search.max_results, 5);
        assert_eq!(s.catalog.api_version, "wc/v2");
        assert_eq!(s.catalog.timeout_secs, 3);
    }

    #[test]
    fn error_zero_max_results() {
        let toml = r#"
[search]
max_results = 0
max_input_chars = 48
max_candidates = 1024

[catalog]
api_version = "wc/v3"
timeout_secs = 10
unpriced_label = "n/a"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("search.max_results"));
    }

    #[test]
    fn error_zero_timeout() {
        let toml = r#"
[search]
max_results = 3
max_input_chars = 48
max_candidates = 1024

[catalog]
api_version = "wc/v3"
timeout_secs = 0
unpriced_label = "n/a"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("catalog.timeout_secs"));
    }

    #[test]
    fn error_blank_api_version() {
        let toml = r#"
[search]
max_results = 3
max_input_chars = 48
max_candidates = 1024

[catalog]
api_version = "  "
timeout_secs = 10
unpriced_label = "n/a"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("catalog.api_version"));
    }

    #[test]
    fn error_negative_is_parse_error() {
        let toml = r#"
[search]
max_results = -1
max_input_chars = 48
max_candidates = 1024

[catalog]
api_version = "wc/v3"
timeout_secs = 10
unpriced_label = "n/a"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[search]
max_results = 3
max_input_chars = 48
max_candidates = 1024
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
