use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Serialize(String),
    Backend(String),
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "I/O Error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization Error: {}", msg),
            StorageError::Backend(msg) => write!(f, "Storage Backend Error: {}", msg),
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialize(error.to_string())
    }
}
