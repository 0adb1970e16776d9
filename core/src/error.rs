use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cannot load config {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("Scheduler is closed; cannot install timer")]
    SchedulerClosed,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StreamResult<T> = Result<T, StreamError>;
