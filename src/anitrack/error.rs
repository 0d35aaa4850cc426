use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Anime already exists: {0}")]
    DuplicateTitle(String),

    #[error("Anime not found: {0}")]
    TitleNotFound(String),

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("{0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
