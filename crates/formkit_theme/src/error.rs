use std::path::PathBuf;

use formkit_core::CoreError;
use thiserror::Error;

/// Errors raised while loading a theme file
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
