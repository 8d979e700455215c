//! Loading custom script map and settings files.

use std::fs;
use std::io;
use std::path::Path;

use tarr_core::script_map::{parse_script_map_toml, ScriptMap, ScriptMapError, ScriptMapTables};
use tarr_core::settings::{self, parse_settings_toml, Settings, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {source}")]
    ScriptMap {
        path: String,
        #[source]
        source: ScriptMapError,
    },

    #[error("{path}: {source}")]
    Settings {
        path: String,
        #[source]
        source: SettingsError,
    },
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Read and validate a script map file.
pub fn load_script_map(path: &Path) -> Result<(String, ScriptMapTables), ConfigError> {
    let content = read(path)?;
    let tables = parse_script_map_toml(&content).map_err(|source| ConfigError::ScriptMap {
        path: path.display().to_string(),
        source,
    })?;
    Ok((content, tables))
}

/// Read and validate a settings file.
pub fn load_settings(path: &Path) -> Result<(String, Settings), ConfigError> {
    let content = read(path)?;
    let parsed = parse_settings_toml(&content).map_err(|source| ConfigError::Settings {
        path: path.display().to_string(),
        source,
    })?;
    Ok((content, parsed))
}

/// Install custom files as the process-wide script map and settings.
///
/// Must run before anything touches `ScriptMap::global()` or `settings()`.
pub fn install_overrides(
    script_map: Option<&Path>,
    settings_file: Option<&Path>,
) -> Result<(), ConfigError> {
    if let Some(path) = script_map {
        let (content, _) = load_script_map(path)?;
        ScriptMap::init_custom(content).map_err(|source| ConfigError::ScriptMap {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "custom script map installed");
    }
    if let Some(path) = settings_file {
        let (content, _) = load_settings(path)?;
        settings::init_custom(content).map_err(|source| ConfigError::Settings {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "custom settings installed");
    }
    Ok(())
}
