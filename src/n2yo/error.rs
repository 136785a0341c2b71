use thiserror::Error;

#[derive(Debug, Error)]
pub enum N2yoError {
    #[error("upstream returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("no position data returned")]
    NoPositions,
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
