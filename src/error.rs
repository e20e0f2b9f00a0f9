use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Aggregate table capacity of {capacity} slots exhausted; input holds more distinct stations than configured")]
    TableCapacity { capacity: usize },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}
