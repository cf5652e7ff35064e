//! # cvdok-extract
//!
//! Plain-text extraction from uploaded resume files.
//!
//! Supported inputs are PDF and DOCX, routed by a [`FileKind`] parsed from
//! the file extension. Any other extension is a distinct
//! [`ExtractError::UnsupportedType`] failure; extraction never silently
//! returns empty text for a type it does not understand.
//!
//! ## Example
//!
//! ```no_run
//! use cvdok_extract::{extract_text, FileKind};
//!
//! let bytes = std::fs::read("resume.pdf")?;
//! let kind = FileKind::from_tag("pdf")?;
//! let text = extract_text(&bytes, kind)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod sources;

pub use error::{ExtractError, Result};
pub use sources::{extract_text, FileKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
