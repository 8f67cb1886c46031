use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("Unknown page '{0}' (expected one of: generics, protocols)")]
    UnknownPage(String),

    #[error("Unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownFormat(String),

    #[error("Flag '{0}' expects a value")]
    MissingArgument(String),

    #[error("Unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to encode transcript: {0}")]
    Json(#[from] serde_json::Error),
}

impl TourError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
