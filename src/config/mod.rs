//! Config module: optional defaults read from `<config_dir>/reltime/config.toml`.
//!
//! Every key is optional. A missing file is not an error and yields the
//! defaults (Polish, numeric `auto`, smallest unit `second`).

use anyhow::Context;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RelativeTimeError;
use crate::locale::{Locale, Numeric, RelativeTimeFormatter};
use crate::units::DurationUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    pub numeric: Numeric,
    /// Floor passed to the unit selector when the command line does not give one.
    pub smallest: DurationUnit,
}

impl Config {
    pub fn formatter(&self) -> Result<RelativeTimeFormatter, RelativeTimeError> {
        RelativeTimeFormatter::try_new(self.locale, self.numeric)
    }
}

pub fn config_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir().ok_or(RelativeTimeError::ConfigDirNotFound)?;
    Ok(base.join("reltime"))
}

pub fn config_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load the config from the default path.
pub fn load_config() -> anyhow::Result<Config> {
    load_from(&config_path()?)
}

/// Load the config from `path`, falling back to defaults when the file is absent.
///
/// Unknown keys are logged and ignored; malformed values are an error.
pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let parse_error = |source| RelativeTimeError::ConfigParse {
        path: path.to_path_buf(),
        source,
    };
    let raw: toml::Table = toml::from_str(&content).map_err(parse_error)?;
    for key in raw.keys() {
        if !matches!(key.as_str(), "locale" | "numeric" | "smallest") {
            tracing::warn!(path = %path.display(), key = %key, "ignoring unknown config key");
        }
    }

    let config: Config = toml::Value::Table(raw).try_into().map_err(parse_error)?;
    tracing::debug!(?config, path = %path.display(), "loaded config");
    Ok(config)
}
