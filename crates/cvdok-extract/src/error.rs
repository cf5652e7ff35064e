//! Error types for text extraction

use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting text from an uploaded file
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file extension maps to no known extractor
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// The PDF library could not read the document
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// The DOCX container could not be opened
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The document XML could not be parsed
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Required file not found in the DOCX container
    #[error("Required file not found: {0}")]
    MissingPart(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
