use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),
}
