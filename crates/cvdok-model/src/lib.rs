//! # cvdok-model
//!
//! Structured resume record types for cvdok.
//!
//! A [`ResumeRecord`] is the fixed-schema JSON object produced by the
//! structuring step. Every field carries a serde default, so a record
//! deserialized from sparse JSON always has empty vectors and `None`
//! scalars rather than missing keys. Downstream consumers never need
//! defensive lookups.
//!
//! ## Example
//!
//! ```
//! use cvdok_model::ResumeRecord;
//!
//! let record: ResumeRecord = serde_json::from_str(r#"{"name": "Jane Doe"}"#).unwrap();
//! assert_eq!(record.name, "Jane Doe");
//! assert!(record.experience.is_empty());
//! assert!(record.contact.email.is_none());
//! ```

pub mod record;

pub use record::{
    Contact, Education, Experience, Project, ResumeRecord, Skills, PROFILE_PLACEHOLDER,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
