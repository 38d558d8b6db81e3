use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("duplicate project id \"{0}\"")]
    DuplicateId(String),

    #[error("duplicate project slug \"{0}\"")]
    DuplicateSlug(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
