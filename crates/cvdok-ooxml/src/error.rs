//! Error types for DOCX generation

use thiserror::Error;

/// Errors that can occur while building a DOCX package
#[derive(Error, Debug)]
pub enum DocxError {
    /// Error writing the ZIP container
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for DOCX operations
pub type Result<T> = std::result::Result<T, DocxError>;
