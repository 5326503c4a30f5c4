use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelativeTimeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown duration unit '{0}' (expected second, minute, hour, day, month or year)")]
    UnknownUnit(String),

    #[error("Unknown locale '{0}' (expected pl or en)")]
    UnknownLocale(String),

    #[error("Unknown numeric mode '{0}' (expected auto or always)")]
    UnknownNumeric(String),

    #[error("Locale data unavailable for {0}")]
    FormatterData(String),

    #[error("Cannot determine config directory")]
    ConfigDirNotFound,

    #[error("Failed to parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
