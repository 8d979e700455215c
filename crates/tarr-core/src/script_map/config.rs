use std::collections::BTreeMap;

use serde::Deserialize;

/// Longest Latin token the forward table may contain.
pub const MAX_FORWARD_TOKEN_CHARS: usize = 3;
/// Longest Armenian token the reverse table may contain.
pub const MAX_REVERSE_TOKEN_CHARS: usize = 2;

#[derive(Deserialize)]
struct ScriptMapConfig {
    forward: BTreeMap<String, Vec<String>>,
    reverse: BTreeMap<String, String>,
}

/// Validated contents of a script map TOML document.
#[derive(Debug, Clone)]
pub struct ScriptMapTables {
    pub forward: BTreeMap<String, Vec<String>>,
    pub reverse: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptMapError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[forward] table is empty")]
    EmptyForward,
    #[error("[reverse] table is empty")]
    EmptyReverse,
    #[error("forward key must be 1-{MAX_FORWARD_TOKEN_CHARS} lowercase characters: {0:?}")]
    InvalidForwardKey(String),
    #[error("reverse key must be 1-{MAX_REVERSE_TOKEN_CHARS} characters: {0:?}")]
    InvalidReverseKey(String),
    #[error("forward key {0:?} has no substitutions")]
    EmptySubstitutions(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("script map already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a script map TOML document.
pub fn parse_script_map_toml(toml_str: &str) -> Result<ScriptMapTables, ScriptMapError> {
    let config: ScriptMapConfig =
        toml::from_str(toml_str).map_err(|e| ScriptMapError::Parse(e.to_string()))?;

    if config.forward.is_empty() {
        return Err(ScriptMapError::EmptyForward);
    }
    if config.reverse.is_empty() {
        return Err(ScriptMapError::EmptyReverse);
    }

    for (key, values) in &config.forward {
        let len = key.chars().count();
        // Input is lower-cased before lookup, so an uppercase key could never match.
        if len == 0 || len > MAX_FORWARD_TOKEN_CHARS || key.chars().any(char::is_uppercase) {
            return Err(ScriptMapError::InvalidForwardKey(key.clone()));
        }
        if values.is_empty() {
            return Err(ScriptMapError::EmptySubstitutions(key.clone()));
        }
        if values.iter().any(String::is_empty) {
            return Err(ScriptMapError::EmptyValue(key.clone()));
        }
    }

    for (key, value) in &config.reverse {
        let len = key.chars().count();
        if len == 0 || len > MAX_REVERSE_TOKEN_CHARS {
            return Err(ScriptMapError::InvalidReverseKey(key.clone()));
        }
        if value.is_empty() {
            return Err(ScriptMapError::EmptyValue(key.clone()));
        }
    }

    Ok(ScriptMapTables {
        forward: config.forward,
        reverse: config.reverse,
    })
}
