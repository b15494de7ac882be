use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading flag declarations from TOML.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagFileError {
    #[error("flag file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read flag file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse flag file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid flag declarations: {0}")]
    Syntax(#[from] toml::de::Error),

    #[error("boolean flag '{0}' cannot declare a default")]
    BoolDefault(String),
}
