//! Text extraction from PDF files
//!
//! Thin wrapper over `pdf-extract`, which walks the page content streams
//! and reassembles reading-order text.

use crate::error::{ExtractError, Result};

/// Extract plain text from an in-memory PDF file
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let text =
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))?;
    if text.trim().is_empty() {
        log::warn!("PDF produced no extractable text (scanned document?)");
    }
    Ok(text)
}
