use thiserror::Error;

#[derive(Error, Debug)]
pub enum KleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot compute bounds of an empty layout")]
    EmptyLayout,
}

pub type Result<T, E = KleError> = std::result::Result<T, E>;
