//! End-to-end coverage for the resume renderer
//!
//! Every test renders a record, re-opens the produced bytes as a ZIP and
//! inspects `word/document.xml`, the same way a consumer (or Word) would.

use std::io::Cursor;

use cvdok_model::{Contact, Education, Experience, ResumeRecord, Skills, PROFILE_PLACEHOLDER};
use cvdok_ooxml::{render_resume, DocxArchive, ResumeRenderer, Theme};

/// The paragraph that closes the first section (and thereby starts the
/// overflow page)
const SECTION_BREAK: &str = "<w:p><w:pPr><w:sectPr>";

fn render_archive(record: &ResumeRecord) -> DocxArchive {
    let bytes = render_resume(record).expect("render failed");
    DocxArchive::from_reader(Cursor::new(bytes)).expect("output is not a valid ZIP")
}

fn render_doc_xml(record: &ResumeRecord) -> String {
    render_archive(record)
        .get_string("word/document.xml")
        .expect("word/document.xml missing")
}

fn experience(title: &str, achievements: &[&str]) -> Experience {
    Experience {
        title: title.to_string(),
        company: Some("Acme".to_string()),
        start_date: Some("Jan 2020".to_string()),
        end_date: Some("Present".to_string()),
        achievements: achievements.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

#[test]
fn test_minimal_record_roundtrip() {
    let record: ResumeRecord = serde_json::from_str(
        r#"{"name":"Jane Doe","contact":{"email":"jane@x.com"},"experience":[],"education":[],
            "skills":{"technical":[],"tools":[],"soft":[]},"certifications":[],"projects":[],
            "awards":[],"languages":[]}"#,
    )
    .unwrap();

    let archive = render_archive(&record);

    for part in [
        "[Content_Types].xml",
        "_rels/.rels",
        "word/document.xml",
        "word/_rels/document.xml.rels",
        "word/styles.xml",
        "word/numbering.xml",
    ] {
        assert!(archive.contains(part), "missing package part: {}", part);
    }

    let doc_xml = archive.get_string("word/document.xml").unwrap();
    assert!(doc_xml.contains("JANE DOE"), "uppercased name not found");
    assert!(doc_xml.contains("jane@x.com"), "email not found");
    assert!(
        !doc_xml.contains("CERTIFICATIONS"),
        "empty certifications must not render a section"
    );
}

#[test]
fn test_document_xml_is_well_formed() {
    let record = ResumeRecord {
        name: "Jane <Doe> & Co".to_string(),
        experience: vec![
            experience("Engineer", &["Shipped \"things\" & more"]),
            experience("Intern", &["Did <stuff>"]),
        ],
        certifications: vec!["Cert A".to_string()],
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);

    let mut reader = quick_xml::Reader::from_reader(doc_xml.as_bytes());
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("document.xml is not well-formed: {}", e),
        }
        buf.clear();
    }
}

#[test]
fn test_no_experience_renders_header_only() {
    let record = ResumeRecord::default();
    let doc_xml = render_doc_xml(&record);

    // Header present, but no bordered content box under it and no
    // overflow page. The only height-pinned row is the outer layout row;
    // with an entry present the nested box would add a second one.
    assert_eq!(doc_xml.matches("PROFESSIONAL EXPERIENCE").count(), 1);
    assert!(!doc_xml.contains(SECTION_BREAK), "no overflow page expected");
    assert_eq!(doc_xml.matches(r#"w:hRule="atLeast""#).count(), 1);
}

#[test]
fn test_single_experience_stays_on_page_one() {
    let record = ResumeRecord {
        experience: vec![experience("Solo Role", &["Did the work"])],
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);

    assert!(doc_xml.contains("Solo Role"));
    assert_eq!(doc_xml.matches("PROFESSIONAL EXPERIENCE").count(), 1);
    assert!(!doc_xml.contains(SECTION_BREAK), "no overflow page expected");
}

#[test]
fn test_overflow_page_holds_remaining_entries_in_order() {
    let titles = ["Role0", "Role1", "Role2", "Role3"];
    let record = ResumeRecord {
        experience: titles.iter().map(|t| experience(t, &[])).collect(),
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);

    // Header appears once on page 1 and once on the overflow page
    assert_eq!(doc_xml.matches("PROFESSIONAL EXPERIENCE").count(), 2);

    let break_at = doc_xml
        .find(SECTION_BREAK)
        .expect("overflow page must start with a section break");

    // Exactly the first entry before the break, the rest after, in order
    assert!(doc_xml.find("Role0").unwrap() < break_at);
    let mut last = break_at;
    for title in &titles[1..] {
        let at = doc_xml.find(title).expect(title);
        assert!(at > last, "{} out of order", title);
        last = at;
    }
    // Each entry appears exactly once
    for title in &titles {
        assert_eq!(doc_xml.matches(title).count(), 1);
    }
}

#[test]
fn test_overflow_section_has_its_own_margins() {
    let record = ResumeRecord {
        experience: vec![experience("A", &[]), experience("B", &[])],
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);

    // First section keeps the narrow page-1 margins, the final section
    // uses the wider overflow left margin
    let first_sect = doc_xml.find("<w:sectPr>").unwrap();
    let last_sect = doc_xml.rfind("<w:sectPr>").unwrap();
    assert!(first_sect < last_sect, "expected two sections");
    assert!(doc_xml[first_sect..first_sect + 200].contains(r#"w:left="360""#));
    assert!(doc_xml[last_sect..].contains(r#"w:left="504""#));
}

#[test]
fn test_skills_capped_at_ten_in_input_order() {
    let record = ResumeRecord {
        skills: Skills {
            technical: (0..8).map(|i| format!("Tech{}", i)).collect(),
            tools: (0..8).map(|i| format!("Tool{}", i)).collect(),
            soft: vec!["Softskill".to_string()],
        },
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);

    for i in 0..8 {
        assert!(doc_xml.contains(&format!("Tech{}", i)));
    }
    assert!(doc_xml.contains("Tool0"));
    assert!(doc_xml.contains("Tool1"));
    assert!(!doc_xml.contains("Tool2"), "cap exceeded");
    assert!(!doc_xml.contains("Softskill"), "soft skills are not rendered");

    // rendered_skill_count == min(10, technical + tools): with no
    // achievements in the record, every bullet is a skill
    assert_eq!(doc_xml.matches("<w:numPr>").count(), 10);
}

#[test]
fn test_fewer_skills_render_all() {
    let record = ResumeRecord {
        skills: Skills {
            technical: vec!["Rust".to_string()],
            tools: vec!["Git".to_string()],
            soft: vec![],
        },
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);
    assert_eq!(doc_xml.matches("<w:numPr>").count(), 2);
}

#[test]
fn test_profile_placeholder_when_profile_and_summary_missing() {
    let record = ResumeRecord::default();
    let doc_xml = render_doc_xml(&record);
    assert!(doc_xml.contains(PROFILE_PLACEHOLDER));
}

#[test]
fn test_profile_takes_precedence_over_summary() {
    let record = ResumeRecord {
        profile: Some("From the profile".to_string()),
        summary: Some("From the summary".to_string()),
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);
    assert!(doc_xml.contains("From the profile"));
    assert!(!doc_xml.contains("From the summary"));
    assert!(!doc_xml.contains(PROFILE_PLACEHOLDER));
}

#[test]
fn test_summary_used_when_profile_empty() {
    let record = ResumeRecord {
        profile: Some(String::new()),
        summary: Some("From the summary".to_string()),
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);
    assert!(doc_xml.contains("From the summary"));
}

#[test]
fn test_achievement_newlines_collapse_to_one_bullet() {
    let record = ResumeRecord {
        experience: vec![experience(
            "Engineer",
            &["Improved throughput\nby 40%\nacross services"],
        )],
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);

    assert!(doc_xml.contains("Improved throughput by 40% across services"));
    // One achievement, one bullet
    assert_eq!(doc_xml.matches("<w:numPr>").count(), 1);
}

#[test]
fn test_experience_header_row_formatting() {
    let record = ResumeRecord {
        experience: vec![Experience {
            title: "Staff Engineer".to_string(),
            company: Some("Initech".to_string()),
            start_date: Some("2019".to_string()),
            end_date: None,
            ..Default::default()
        }],
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);

    assert!(doc_xml.contains("Staff Engineer"));
    assert!(doc_xml.contains(" at Initech"));
    assert!(doc_xml.contains("(2019 - )"));
}

#[test]
fn test_education_entries_render_in_sidebar() {
    let record = ResumeRecord {
        education: vec![Education {
            degree: Some("BSc Computer Science".to_string()),
            institution: Some("State University".to_string()),
            start_date: Some("2014".to_string()),
            end_date: Some("2018".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);

    assert!(doc_xml.contains("EDUCATION"));
    assert!(doc_xml.contains("BSc Computer Science"));
    assert!(doc_xml.contains("State University"));
    assert!(doc_xml.contains("2014 - 2018"));
}

#[test]
fn test_certifications_render_only_when_present() {
    let record = ResumeRecord {
        certifications: vec!["AWS Solutions Architect".to_string()],
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);
    assert!(doc_xml.contains("CERTIFICATIONS"));
    assert!(doc_xml.contains("AWS Solutions Architect"));
}

#[test]
fn test_projects_accepted_but_not_rendered() {
    let record: ResumeRecord = serde_json::from_str(
        r#"{"projects":[{"name":"SideProject","description":"A thing","technologies":["Rust"]}]}"#,
    )
    .unwrap();
    let doc_xml = render_doc_xml(&record);
    assert!(!doc_xml.contains("SideProject"));
}

#[test]
fn test_missing_logo_falls_back_to_wordmark() {
    let record = ResumeRecord::default();
    let archive = render_archive(&record);
    let doc_xml = archive.get_string("word/document.xml").unwrap();

    assert!(doc_xml.contains("KANERIKA"), "wordmark not found");
    assert!(!doc_xml.contains("<w:drawing>"));
    assert!(!archive.contains("word/media/logo.png"));
    let content_types = archive.get_string("[Content_Types].xml").unwrap();
    assert!(!content_types.contains("image/png"));
}

#[test]
fn test_logo_embedded_when_asset_exists() {
    // Enough of a PNG for dimension sniffing
    let mut png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    png.extend_from_slice(&13u32.to_be_bytes());
    png.extend_from_slice(b"IHDR");
    png.extend_from_slice(&400u32.to_be_bytes());
    png.extend_from_slice(&200u32.to_be_bytes());
    png.extend_from_slice(&[8, 6, 0, 0, 0]);

    let dir = tempfile::tempdir().unwrap();
    let logo_path = dir.path().join("logo.png");
    std::fs::write(&logo_path, &png).unwrap();

    let mut theme = Theme::default();
    theme.logo_path = logo_path;

    let bytes = ResumeRenderer::new(theme)
        .render(&ResumeRecord::default())
        .unwrap();
    let archive = DocxArchive::from_reader(Cursor::new(bytes)).unwrap();

    let doc_xml = archive.get_string("word/document.xml").unwrap();
    assert!(doc_xml.contains("<w:drawing>"));
    assert!(!doc_xml.contains("KANERIKA"), "wordmark must not render with a logo");
    assert!(archive.contains("word/media/logo.png"));

    let content_types = archive.get_string("[Content_Types].xml").unwrap();
    assert!(content_types.contains("image/png"));

    let rels = archive.get_string("word/_rels/document.xml.rels").unwrap();
    assert!(rels.contains("media/logo.png"));
}

#[test]
fn test_sidebar_has_shading_and_contact() {
    let record = ResumeRecord {
        name: "Jane Doe".to_string(),
        contact: Contact {
            email: Some("jane@x.com".to_string()),
            phone: Some("555-0100".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let doc_xml = render_doc_xml(&record);

    assert!(doc_xml.contains(r#"w:fill="0066CC""#), "sidebar fill missing");
    assert!(doc_xml.contains("jane@x.com"));
    // Only the email is part of the sidebar contact block
    assert!(!doc_xml.contains("555-0100"));
}

#[test]
fn test_render_is_deterministic() {
    let record = ResumeRecord {
        name: "Jane Doe".to_string(),
        experience: vec![experience("A", &["x"]), experience("B", &["y"])],
        ..Default::default()
    };
    let first = render_resume(&record).unwrap();
    let second = render_resume(&record).unwrap();
    assert_eq!(first, second);
}
