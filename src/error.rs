use std::io;

use crate::flag::FlagFileError;
use thiserror::Error;

/// Top-level error type for the flag-envs library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("flags are not parsed")]
    NotParsed,

    #[error("environment variable {var} is shared by flags '{first}' and '{second}'")]
    EnvNameCollision {
        var: String,
        first: String,
        second: String,
    },

    #[error("flag provided but not defined: --{0}")]
    UnknownFlag(String),

    #[error("invalid boolean value '{value}' for --{name}")]
    InvalidBool { name: String, value: String },

    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("flag file error: {0}")]
    FlagFile(#[from] FlagFileError),

    #[error("failed to write flag report: {0}")]
    Output(#[from] io::Error),
}
