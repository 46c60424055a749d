use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactzError {
    #[error("Missing or invalid name")]
    MissingName,

    #[error("Missing or invalid phone")]
    MissingPhone,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid command pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ContactzError>;
