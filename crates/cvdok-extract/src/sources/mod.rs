//! Extraction source implementations
//!
//! One module per supported container format, plus the extension-based
//! router used by callers.

pub mod docx;
pub mod pdf;

use std::str::FromStr;

use crate::error::{ExtractError, Result};

/// Supported input file types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Parse a lowercase-insensitive extension tag (without the dot)
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            other => Err(ExtractError::UnsupportedType(other.to_string())),
        }
    }
}

impl FromStr for FileKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

/// Extract plain text from in-memory file bytes
pub fn extract_text(bytes: &[u8], kind: FileKind) -> Result<String> {
    match kind {
        FileKind::Pdf => pdf::extract_text(bytes),
        FileKind::Docx => docx::extract_text(bytes),
    }
}
