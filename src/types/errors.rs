use std::fmt;

// === StoreError ===

/// Errors raised while reading or writing the user data file.
#[derive(Debug)]
pub enum StoreError {
    /// Reading, writing or creating the data file failed.
    IoError(String),
    /// The data file could not be parsed or serialized.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(msg) => write!(f, "User data I/O error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "User data serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(String),
    /// The provided tab index is out of bounds.
    InvalidIndex(usize),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
            TabError::InvalidIndex(index) => write!(f, "Invalid tab index: {}", index),
        }
    }
}

impl std::error::Error for TabError {}

// === DownloadError ===

/// Errors related to download bookkeeping.
#[derive(Debug)]
pub enum DownloadError {
    /// No in-progress download matches.
    NotFound(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::NotFound(id) => write!(f, "Download not found: {}", id),
        }
    }
}

impl std::error::Error for DownloadError {}
