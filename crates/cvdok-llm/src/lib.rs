//! # cvdok-llm
//!
//! Gemini client turning extracted resume text into structured
//! [`cvdok_model::ResumeRecord`] values.
//!
//! The call is synchronous and happens once per resume; a reply that is
//! not valid JSON for the schema is surfaced as an error without retry.
//!
//! ## Example
//!
//! ```no_run
//! use cvdok_llm::GeminiClient;
//!
//! let client = GeminiClient::from_env()?;
//! let record = client.parse_resume("raw resume text...", None)?;
//! println!("{}", record.name);
//! # Ok::<(), cvdok_llm::LlmError>(())
//! ```

pub mod client;
pub mod error;
pub mod prompts;

pub use client::{GeminiClient, API_KEY_ENV, DEFAULT_API_URL, MODEL};
pub use error::{LlmError, Result};
pub use prompts::STRUCTURE_SCHEMA_PROMPT;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
