//! Resume record definitions
//!
//! These types mirror the JSON schema the structuring prompt asks the model
//! to produce. Absent keys deserialize to empty vectors or `None`; unknown
//! keys are ignored.

use serde::{Deserialize, Serialize};

/// Text shown in the profile box when neither `profile` nor `summary` is set
pub const PROFILE_PLACEHOLDER: &str = "No profile information provided.";

/// A complete structured resume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Candidate name (may be empty, never fabricated)
    #[serde(default)]
    pub name: String,
    /// Contact details
    #[serde(default)]
    pub contact: Contact,
    /// Short summary paragraph
    #[serde(default)]
    pub summary: Option<String>,
    /// Longer profile paragraph; preferred over `summary` when both exist
    #[serde(default)]
    pub profile: Option<String>,
    /// Work history, most relevant first
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Education history
    #[serde(default)]
    pub education: Vec<Education>,
    /// Skill groups
    #[serde(default)]
    pub skills: Skills,
    /// Certification names
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Personal or professional projects (accepted but not rendered)
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Award names
    #[serde(default)]
    pub awards: Vec<String>,
    /// Spoken languages
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Contact details for a candidate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Fully-qualified URLs, trailing punctuation stripped upstream
    #[serde(default)]
    pub links: Vec<String>,
}

/// A single work-history entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Free-form date, e.g. "Jan 2021"
    #[serde(default)]
    pub start_date: Option<String>,
    /// Free-form date, may be "Present"
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// A single education entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
}

/// Skill lists grouped by kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

/// A project entry (part of the schema, not part of the rendered layout)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl ResumeRecord {
    /// Text for the profile box: `profile`, then `summary`, then the
    /// placeholder. Empty strings count as absent.
    pub fn profile_text(&self) -> &str {
        non_empty(self.profile.as_deref())
            .or_else(|| non_empty(self.summary.as_deref()))
            .unwrap_or(PROFILE_PLACEHOLDER)
    }
}

impl Experience {
    /// Date range as `"start - end"`, with empty strings for unknown dates
    pub fn date_range(&self) -> String {
        date_range(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

impl Education {
    /// Date range as `"start - end"`, with empty strings for unknown dates
    pub fn date_range(&self) -> String {
        date_range(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

impl Skills {
    /// The combined technical + tools list, in input order, capped at
    /// `limit`. No sorting, no dedup.
    pub fn combined(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.technical
            .iter()
            .chain(self.tools.iter())
            .map(String::as_str)
            .take(limit)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn date_range(start: Option<&str>, end: Option<&str>) -> String {
    format!("{} - {}", start.unwrap_or(""), end.unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_record_gets_defaults() {
        let record: ResumeRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.name, "");
        assert!(record.contact.email.is_none());
        assert!(record.contact.links.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.skills.technical.is_empty());
        assert!(record.certifications.is_empty());
        assert!(record.projects.is_empty());
    }

    #[test]
    fn test_null_scalars_stay_null() {
        let json = r#"{
            "name": "Jane",
            "contact": {"email": null, "phone": null, "location": null, "links": []},
            "summary": null
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert!(record.contact.email.is_none());
        assert!(record.summary.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let record: ResumeRecord =
            serde_json::from_str(r#"{"name": "Jane", "unexpected": 42}"#).unwrap();
        assert_eq!(record.name, "Jane");
    }

    #[test]
    fn test_profile_text_prefers_profile() {
        let record = ResumeRecord {
            profile: Some("Profile text".to_string()),
            summary: Some("Summary text".to_string()),
            ..Default::default()
        };
        assert_eq!(record.profile_text(), "Profile text");
    }

    #[test]
    fn test_profile_text_falls_back_to_summary() {
        let record = ResumeRecord {
            profile: None,
            summary: Some("Summary text".to_string()),
            ..Default::default()
        };
        assert_eq!(record.profile_text(), "Summary text");
    }

    #[test]
    fn test_profile_text_placeholder_when_both_missing() {
        let record = ResumeRecord::default();
        assert_eq!(record.profile_text(), PROFILE_PLACEHOLDER);

        // Empty and whitespace-only strings count as absent
        let record = ResumeRecord {
            profile: Some("  ".to_string()),
            summary: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(record.profile_text(), PROFILE_PLACEHOLDER);
    }

    #[test]
    fn test_combined_skills_order_and_cap() {
        let skills = Skills {
            technical: (1..=7).map(|i| format!("tech{}", i)).collect(),
            tools: (1..=7).map(|i| format!("tool{}", i)).collect(),
            soft: vec!["ignored".to_string()],
        };

        let combined: Vec<&str> = skills.combined(10).collect();
        assert_eq!(combined.len(), 10);
        assert_eq!(combined[0], "tech1");
        assert_eq!(combined[6], "tech7");
        assert_eq!(combined[7], "tool1");
        assert_eq!(combined[9], "tool3");
    }

    #[test]
    fn test_combined_skills_no_dedup() {
        let skills = Skills {
            technical: vec!["Rust".to_string()],
            tools: vec!["Rust".to_string()],
            soft: vec![],
        };
        let combined: Vec<&str> = skills.combined(10).collect();
        assert_eq!(combined, vec!["Rust", "Rust"]);
    }

    #[test]
    fn test_date_range_with_missing_dates() {
        let exp = Experience {
            start_date: Some("Jan 2021".to_string()),
            end_date: None,
            ..Default::default()
        };
        assert_eq!(exp.date_range(), "Jan 2021 - ");

        let edu = Education::default();
        assert_eq!(edu.date_range(), " - ");
    }

    #[test]
    fn test_roundtrip_serialization() {
        let record = ResumeRecord {
            name: "Jane Doe".to_string(),
            contact: Contact {
                email: Some("jane@x.com".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        let restored: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }
}
