//! Error types for the undraft library.

use std::io;
use thiserror::Error;

/// Result type alias for undraft operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting or correcting drafts.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configured editor-root selector could not be compiled.
    #[error("Invalid editor selector: {0}")]
    Selector(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error building or loading a correction dictionary.
    #[error("Dictionary error: {0}")]
    Dictionary(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Dictionary(err.to_string())
    }
}
