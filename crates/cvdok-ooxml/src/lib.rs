//! # cvdok-ooxml
//!
//! DOCX generation for cvdok standardized resumes.
//!
//! This crate builds the OOXML package from scratch: the ZIP container,
//! the boilerplate parts (content types, styles, numbering) and the
//! rendered `word/document.xml` laying a resume record out into the fixed
//! sidebar + main-content template.
//!
//! ## Example
//!
//! ```no_run
//! use cvdok_model::ResumeRecord;
//! use cvdok_ooxml::{render_resume, ResumeRenderer, Theme};
//!
//! let record: ResumeRecord = serde_json::from_str("{}")?;
//!
//! // Default theme
//! let bytes = render_resume(&record)?;
//!
//! // Or with a customized theme
//! let mut theme = Theme::default();
//! theme.logo_path = "assets/logo.png".into();
//! let bytes = ResumeRenderer::new(theme).render(&record)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod archive;
pub mod error;
pub mod image;
pub mod package;
pub mod relationships;
pub mod renderer;
pub mod theme;
pub mod xml;

pub use archive::DocxArchive;
pub use error::{DocxError, Result};
pub use relationships::Relationships;
pub use renderer::{render_resume, ResumeRenderer};
pub use theme::{PageMargins, Rgb, Theme};

/// MIME type of the generated documents
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
