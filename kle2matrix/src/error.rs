use std::path::PathBuf;

use kle_core::KleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Layout(#[from] KleError),

    #[error("Invalid board config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Netlist encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}
