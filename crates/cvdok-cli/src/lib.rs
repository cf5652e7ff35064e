//! cvdok CLI - Command-line interface library
//!
//! This library provides the CLI functionality for cvdok:
//! - Convert: run the full pipeline, resume files to standardized DOCX
//! - Render: build a DOCX from an already-structured record JSON
//! - Extract-text: dump the raw text the pipeline would send to the model
//!
//! # Binary Usage
//!
//! ```bash
//! # Standardize one or more resumes (needs GEMINI_API_KEY)
//! cvdok convert resume.pdf old_resume.docx --output-dir out/
//!
//! # Render a record file offline
//! cvdok render resume_data.json --output resume.docx
//!
//! # Inspect extraction only
//! cvdok extract-text resume.pdf
//! ```

pub mod app;

// Re-export main entry point and commands
pub use app::{convert_command, extract_text_command, render_command, run_cli};
