//! Resume renderer
//!
//! This module lays a [`ResumeRecord`] out into a fixed two-section DOCX:
//! a shaded sidebar (identity, education, skills, certifications) next to
//! the main content column (profile box, first experience entry), and an
//! overflow section holding every remaining experience entry.
//!
//! The layout is deterministic: the same record and theme always produce
//! the same body XML. Missing record fields never fail a render; every
//! access has a visual fallback (empty text, placeholder, or an omitted
//! section).
//!
//! # Example
//!
//! ```no_run
//! use cvdok_model::ResumeRecord;
//! use cvdok_ooxml::render_resume;
//!
//! let record: ResumeRecord = serde_json::from_str("{}")?;
//! let bytes = render_resume(&record)?;
//! std::fs::write("resume.docx", bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use cvdok_model::{Experience, ResumeRecord};

use crate::archive::DocxArchive;
use crate::error::Result;
use crate::image::{inches_to_emu, scaled_extent};
use crate::package;
use crate::relationships::Relationships;
use crate::theme::{PageMargins, Rgb, Theme};
use crate::xml::{cell_borders, cell_margins, cell_shading, escape_xml, run_props};

/// US Letter page width in twips
const PAGE_WIDTH: i64 = 12240;
/// US Letter page height in twips
const PAGE_HEIGHT: i64 = 15840;

/// Preferred width of the title cell in an experience entry header (3.5")
const ENTRY_TITLE_WIDTH: i64 = 5040;
/// Preferred width of the date cell in an experience entry header (2.5")
const ENTRY_DATE_WIDTH: i64 = 3600;
/// Left indent for achievement bullets (0.75")
const ACHIEVEMENT_INDENT: i64 = 1080;
/// Left indent for sidebar skill bullets (0.45")
const SKILL_INDENT: i64 = 648;

/// Paragraph alignment
#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
}

impl Align {
    fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
        }
    }
}

/// Render a resume record to DOCX bytes with the default theme
pub fn render_resume(record: &ResumeRecord) -> Result<Vec<u8>> {
    ResumeRenderer::new(Theme::default()).render(record)
}

/// Builds the document body paragraph by paragraph, then serializes the
/// whole package once at the end
pub struct ResumeRenderer {
    theme: Theme,
    /// Body XML under construction
    body: String,
    /// Document relationships (styles, numbering, logo)
    relationships: Relationships,
    /// Media files to embed (path, bytes)
    media: Vec<(String, Vec<u8>)>,
    /// Logo bytes, read once per render
    logo: Option<Vec<u8>>,
    /// Next drawing ID for docPr
    next_drawing_id: usize,
}

impl ResumeRenderer {
    /// Create a renderer for the given theme
    pub fn new(theme: Theme) -> Self {
        let mut relationships = Relationships::new();
        relationships.add("styles.xml", Relationships::TYPE_STYLES);
        relationships.add("numbering.xml", Relationships::TYPE_NUMBERING);

        Self {
            theme,
            body: String::new(),
            relationships,
            media: Vec::new(),
            logo: None,
            next_drawing_id: 1,
        }
    }

    /// Render the record into a complete DOCX package
    ///
    /// The only I/O is the optional logo read; a missing asset falls back
    /// to the wordmark and is never an error.
    pub fn render(mut self, record: &ResumeRecord) -> Result<Vec<u8>> {
        self.logo = std::fs::read(&self.theme.logo_path).ok();
        if self.logo.is_none() {
            log::debug!(
                "logo asset not found at {}, using wordmark",
                self.theme.logo_path.display()
            );
        }
        let has_logo = self.logo.is_some();

        self.first_page(record);

        let overflow = record.experience.len() > 1;
        if overflow {
            self.overflow_section(record);
        }

        // The final section carries the margins of whichever page it ends
        let final_margins = if overflow {
            self.theme.overflow_margins
        } else {
            self.theme.page_margins
        };

        let mut document_xml = String::new();
        document_xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        document_xml.push('\n');
        document_xml.push_str(r#"<w:document "#);
        document_xml
            .push_str(r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#);
        document_xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        document_xml.push_str(
            r#"xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" "#,
        );
        document_xml
            .push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        document_xml
            .push_str(r#"xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture">"#);
        document_xml.push('\n');
        document_xml.push_str("<w:body>\n");
        document_xml.push_str(&self.body);
        document_xml.push_str(&sect_pr(&final_margins));
        document_xml.push_str("\n</w:body>\n</w:document>");

        let mut archive = DocxArchive::new();
        archive.set_string("[Content_Types].xml", package::content_types_xml(has_logo));
        archive.set_string("_rels/.rels", package::ROOT_RELS);
        archive.set_string("word/styles.xml", package::styles_xml(&self.theme));
        archive.set_string("word/numbering.xml", package::numbering_xml());
        archive.set_string("word/document.xml", document_xml);
        archive.set_string("word/_rels/document.xml.rels", self.relationships.to_xml());
        for (path, bytes) in self.media {
            archive.set(path, bytes);
        }

        archive.into_bytes()
    }

    // =========================================================================
    // Page 1: sidebar | spacer | main content
    // =========================================================================

    fn first_page(&mut self, record: &ResumeRecord) {
        let sidebar_w = self.theme.sidebar_width;
        let spacer_w = self.theme.spacer_width;
        let main_w = self.theme.main_width;
        let total = sidebar_w + spacer_w + main_w;

        self.body.push_str("<w:tbl>");
        self.body.push_str(&format!(
            r#"<w:tblPr><w:tblW w:w="{total}" w:type="dxa"/><w:tblLayout w:type="fixed"/></w:tblPr>"#
        ));
        self.body.push_str(&format!(
            r#"<w:tblGrid><w:gridCol w:w="{sidebar_w}"/><w:gridCol w:w="{spacer_w}"/><w:gridCol w:w="{main_w}"/></w:tblGrid>"#
        ));

        // Row 1: sidebar and spacer start their vertical merge; main column
        // holds the profile region
        self.body.push_str("<w:tr>");

        self.open_cell(sidebar_w, r#"<w:vMerge w:val="restart"/>"#);
        self.sidebar(record);
        self.body.push_str("</w:tc>");

        self.open_cell(spacer_w, r#"<w:vMerge w:val="restart"/>"#);
        self.body.push_str("<w:p/></w:tc>");

        self.open_cell(main_w, "");
        self.profile_region(record);
        self.body.push_str("</w:tc>");

        self.body.push_str("</w:tr>");

        // Row 2: merged cells continue; main column holds the experience
        // region, pinned to a minimum height so the first page fills
        self.body.push_str(&format!(
            r#"<w:tr><w:trPr><w:trHeight w:val="{}" w:hRule="atLeast"/></w:trPr>"#,
            self.theme.experience_box_height
        ));

        self.open_cell(sidebar_w, "<w:vMerge/>");
        self.body.push_str("<w:p/></w:tc>");

        self.open_cell(spacer_w, "<w:vMerge/>");
        self.body.push_str("<w:p/></w:tc>");

        self.open_cell(main_w, "");
        self.experience_region(record);
        self.body.push_str("</w:tc>");

        self.body.push_str("</w:tr></w:tbl>");
        // Keep a paragraph between the layout table and whatever follows
        self.body.push_str("<w:p/>");
    }

    fn open_cell(&mut self, width: i64, extra_props: &str) {
        self.body.push_str(&format!(
            r#"<w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/>{extra_props}</w:tcPr>"#
        ));
    }

    // =========================================================================
    // Sidebar
    // =========================================================================

    fn sidebar(&mut self, record: &ResumeRecord) {
        self.logo_paragraph();

        // Shaded identity block: a nested single-cell table filled with the
        // accent color
        let width = self.theme.sidebar_width;
        self.body.push_str(&format!(
            r#"<w:tbl><w:tblPr><w:tblW w:w="{width}" w:type="dxa"/><w:tblLayout w:type="fixed"/></w:tblPr><w:tblGrid><w:gridCol w:w="{width}"/></w:tblGrid><w:tr><w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/>{shading}</w:tcPr>"#,
            shading = cell_shading(self.theme.accent),
        ));

        self.name_paragraph(record);
        self.email_paragraph(record);
        self.sidebar_rule();

        self.section_header("EDUCATION", self.theme.sidebar_text, 24, Align::Center);
        self.education_entries(record);
        self.sidebar_rule();

        self.section_header("SKILLS", self.theme.sidebar_text, 24, Align::Center);
        self.skill_bullets(record);
        self.body
            .push_str(r#"<w:p><w:pPr><w:spacing w:after="240"/></w:pPr></w:p>"#);
        self.sidebar_rule();

        if !record.certifications.is_empty() {
            self.section_header("CERTIFICATIONS", self.theme.sidebar_text, 24, Align::Center);
            self.certification_lines(record);
        }

        self.body.push_str("</w:tc></w:tr></w:tbl>");
        // A table cell may not end with a nested table
        self.body.push_str("<w:p/>");
    }

    /// Logo image at sidebar width, or the wordmark text when the asset is
    /// missing
    fn logo_paragraph(&mut self) {
        self.body
            .push_str(r#"<w:p><w:pPr><w:spacing w:before="0"/><w:jc w:val="left"/></w:pPr>"#);

        match self.logo.take() {
            Some(bytes) => {
                let target_width = inches_to_emu(2.4);
                let (width_emu, height_emu) = scaled_extent(&bytes, target_width);

                let rel_id = self.relationships.add_image("media/logo.png");
                self.media.push(("word/media/logo.png".to_string(), bytes));

                let drawing_id = self.next_drawing_id;
                self.next_drawing_id += 1;

                self.drawing(drawing_id, &rel_id, width_emu, height_emu);
            }
            None => {
                let props = run_props(&self.theme.heading_font, None, 28, false, false, false);
                self.body.push_str(&text_run(&props, &self.theme.wordmark));
            }
        }

        self.body.push_str("</w:p>");
    }

    /// Inline `<w:drawing>` for an embedded image
    fn drawing(&mut self, drawing_id: usize, rel_id: &str, width_emu: i64, height_emu: i64) {
        self.body.push_str("<w:r><w:drawing>");
        self.body.push_str(&format!(
            r#"<wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{cx}" cy="{cy}"/><wp:effectExtent l="0" t="0" r="0" b="0"/><wp:docPr id="{id}" name="Logo" descr="Company logo"/><wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic><pic:nvPicPr><pic:cNvPr id="{id}" name="Logo"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{rel}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline>"#,
            cx = width_emu,
            cy = height_emu,
            id = drawing_id,
            rel = rel_id,
        ));
        self.body.push_str("</w:drawing></w:r>");
    }

    fn name_paragraph(&mut self, record: &ResumeRecord) {
        let props = run_props(
            &self.theme.heading_font,
            Some(self.theme.sidebar_text),
            28,
            true,
            false,
            true,
        );
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:jc w:val="center"/><w:spacing w:after="120"/></w:pPr>{}</w:p>"#,
            text_run(&props, &record.name.to_uppercase()),
        ));
    }

    fn email_paragraph(&mut self, record: &ResumeRecord) {
        let email = record.contact.email.as_deref().unwrap_or("");
        let props = run_props(
            &self.theme.heading_font,
            Some(self.theme.sidebar_text),
            18,
            false,
            false,
            false,
        );
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:jc w:val="center"/><w:spacing w:after="400"/></w:pPr>{}</w:p>"#,
            text_run(&props, &format!("\u{2709} {email}")),
        ));
    }

    /// Thin decorative rule between sidebar sections
    fn sidebar_rule(&mut self) {
        let props = run_props(
            &self.theme.heading_font,
            Some(self.theme.sidebar_text),
            7,
            true,
            false,
            false,
        );
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:jc w:val="center"/><w:ind w:right="144"/></w:pPr>{}</w:p>"#,
            text_run(&props, &"_".repeat(120)),
        ));
    }

    fn education_entries(&mut self, record: &ResumeRecord) {
        let props = run_props(
            &self.theme.heading_font,
            Some(self.theme.sidebar_text),
            20,
            false,
            false,
            false,
        );
        for edu in &record.education {
            let lines = [
                edu.degree.as_deref().unwrap_or("").to_string(),
                edu.institution.as_deref().unwrap_or("").to_string(),
                edu.location.as_deref().unwrap_or("").to_string(),
                edu.date_range(),
            ];

            self.body
                .push_str(r#"<w:p><w:pPr><w:spacing w:after="240"/></w:pPr>"#);
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    self.body.push_str("<w:r><w:br/></w:r>");
                }
                self.body.push_str(&text_run(&props, line));
            }
            self.body.push_str("</w:p>");
        }
    }

    fn skill_bullets(&mut self, record: &ResumeRecord) {
        let props = run_props(
            &self.theme.heading_font,
            Some(self.theme.sidebar_text),
            20,
            false,
            false,
            false,
        );
        let limit = self.theme.skill_limit;
        let skills: Vec<&str> = record.skills.combined(limit).collect();
        for skill in skills {
            self.bullet_paragraph(skill, &props, SKILL_INDENT, 40, 40);
        }
    }

    fn certification_lines(&mut self, record: &ResumeRecord) {
        let props = run_props(
            &self.theme.heading_font,
            Some(self.theme.sidebar_text),
            18,
            false,
            false,
            false,
        );
        for cert in &record.certifications {
            self.body.push_str(&format!(
                r#"<w:p><w:pPr><w:jc w:val="left"/><w:spacing w:after="20"/></w:pPr>{}</w:p>"#,
                text_run(&props, cert),
            ));
        }
    }

    // =========================================================================
    // Main content column
    // =========================================================================

    fn profile_region(&mut self, record: &ResumeRecord) {
        self.section_header("PROFILE", self.theme.accent, 44, Align::Left);

        let width = self.theme.main_width;
        let props = run_props(&self.theme.heading_font, None, 22, false, false, false);
        self.body.push_str(&format!(
            r#"<w:tbl><w:tblPr><w:tblW w:w="{width}" w:type="dxa"/><w:tblLayout w:type="fixed"/></w:tblPr><w:tblGrid><w:gridCol w:w="{width}"/></w:tblGrid><w:tr><w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/>{borders}{margins}</w:tcPr><w:p><w:pPr><w:spacing w:after="0"/></w:pPr>{run}</w:p></w:tc></w:tr></w:tbl>"#,
            borders = cell_borders(self.theme.box_border, 1),
            margins = cell_margins(5, 5, 5, 5),
            run = text_run(&props, record.profile_text()),
        ));
        self.body.push_str("<w:p/>");
    }

    fn experience_region(&mut self, record: &ResumeRecord) {
        self.section_header("PROFESSIONAL EXPERIENCE", self.theme.accent, 44, Align::Left);

        if let Some(first) = record.experience.first() {
            let width = self.theme.main_width;
            self.body.push_str(&format!(
                r#"<w:tbl><w:tblPr><w:tblW w:w="{width}" w:type="dxa"/><w:tblLayout w:type="fixed"/></w:tblPr><w:tblGrid><w:gridCol w:w="{width}"/></w:tblGrid><w:tr><w:trPr><w:trHeight w:val="{height}" w:hRule="atLeast"/></w:trPr><w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/><w:vAlign w:val="top"/>{borders}{margins}</w:tcPr>"#,
                height = self.theme.experience_box_height,
                borders = cell_borders(self.theme.box_border, 1),
                margins = cell_margins(0, 5, 0, 0),
            ));
            self.experience_entry(first);
            self.body.push_str("<w:p/></w:tc></w:tr></w:tbl>");
        }
        self.body.push_str("<w:p/>");
    }

    /// One experience entry: two-column header row, then one bullet per
    /// achievement
    fn experience_entry(&mut self, exp: &Experience) {
        let title_props =
            run_props(&self.theme.heading_font, None, 22, true, true, false);
        let company_props =
            run_props(&self.theme.heading_font, None, 20, true, true, false);
        let date_props =
            run_props(&self.theme.heading_font, None, 22, true, false, false);

        self.body.push_str(&format!(
            r#"<w:tbl><w:tblPr><w:tblW w:w="0" w:type="auto"/><w:tblLayout w:type="autofit"/></w:tblPr><w:tblGrid><w:gridCol w:w="{title_w}"/><w:gridCol w:w="{date_w}"/></w:tblGrid><w:tr><w:tc><w:tcPr><w:tcW w:w="{title_w}" w:type="dxa"/></w:tcPr><w:p><w:pPr><w:ind w:left="0" w:firstLine="0"/></w:pPr>{title}{company}</w:p></w:tc><w:tc><w:tcPr><w:tcW w:w="{date_w}" w:type="dxa"/></w:tcPr><w:p><w:pPr><w:jc w:val="left"/></w:pPr>{date}</w:p></w:tc></w:tr></w:tbl>"#,
            title_w = ENTRY_TITLE_WIDTH,
            date_w = ENTRY_DATE_WIDTH,
            title = text_run(&title_props, &exp.title),
            company = text_run(
                &company_props,
                &format!(" at {}", exp.company.as_deref().unwrap_or("")),
            ),
            date = text_run(&date_props, &format!("({})", exp.date_range())),
        ));

        let bullet_props =
            run_props(&self.theme.bullet_font, None, 22, false, false, false);
        for achievement in &exp.achievements {
            let achievement = collapse_newlines(achievement);
            self.bullet_paragraph(&achievement, &bullet_props, ACHIEVEMENT_INDENT, 0, 0);
        }
    }

    // =========================================================================
    // Overflow section
    // =========================================================================

    /// Entries 1.. on a fresh page with its own margins
    fn overflow_section(&mut self, record: &ResumeRecord) {
        // Close the first section; this doubles as the page break
        self.body.push_str(&format!(
            "<w:p><w:pPr>{}</w:pPr></w:p>",
            sect_pr(&self.theme.page_margins)
        ));

        self.section_header("PROFESSIONAL EXPERIENCE", self.theme.accent, 44, Align::Left);

        let margins = self.theme.overflow_margins;
        let width = PAGE_WIDTH - margins.left - margins.right;
        let height = PAGE_HEIGHT
            - margins.top
            - margins.bottom
            - self.theme.overflow_header_allowance;

        self.body.push_str(&format!(
            r#"<w:tbl><w:tblPr><w:tblW w:w="{width}" w:type="dxa"/><w:tblLayout w:type="fixed"/></w:tblPr><w:tblGrid><w:gridCol w:w="{width}"/></w:tblGrid><w:tr><w:trPr><w:trHeight w:val="{height}" w:hRule="atLeast"/></w:trPr><w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/><w:vAlign w:val="top"/>{borders}{cell_margins}</w:tcPr>"#,
            borders = cell_borders(self.theme.box_border, 1),
            cell_margins = cell_margins(5, 8, 5, 8),
        ));

        for exp in &record.experience[1..] {
            self.experience_entry(exp);
        }
        self.body.push_str("<w:p/></w:tc></w:tr></w:tbl>");
    }

    // =========================================================================
    // Shared paragraph builders
    // =========================================================================

    /// Section header: uppercased, colored, bold, underlined
    fn section_header(&mut self, text: &str, color: Rgb, half_points: u32, align: Align) {
        let props = run_props(
            &self.theme.heading_font,
            Some(color),
            half_points,
            true,
            false,
            true,
        );
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:jc w:val="{align}"/><w:spacing w:after="40"/></w:pPr>{run}</w:p>"#,
            align = align.as_str(),
            run = text_run(&props, &text.to_uppercase()),
        ));
    }

    /// One bulleted paragraph using the shared numbering definition
    fn bullet_paragraph(
        &mut self,
        text: &str,
        props: &str,
        indent: i64,
        space_before: u32,
        space_after: u32,
    ) {
        self.body.push_str(&format!(
            r#"<w:p><w:pPr><w:pStyle w:val="{style}"/><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr><w:spacing w:before="{space_before}" w:after="{space_after}"/><w:ind w:left="{indent}"/></w:pPr>{run}</w:p>"#,
            style = package::LIST_PARAGRAPH_STYLE,
            run = text_run(props, text),
        ));
    }
}

/// A text run with explicit properties; whitespace is preserved
fn text_run(props: &str, text: &str) -> String {
    format!(
        r#"<w:r>{props}<w:t xml:space="preserve">{}</w:t></w:r>"#,
        escape_xml(text)
    )
}

/// Collapse embedded line breaks so one achievement stays one bullet
fn collapse_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Section properties: page size plus the given margins
fn sect_pr(margins: &PageMargins) -> String {
    format!(
        r#"<w:sectPr><w:pgSz w:w="{PAGE_WIDTH}" w:h="{PAGE_HEIGHT}"/><w:pgMar w:top="{top}" w:right="{right}" w:bottom="{bottom}" w:left="{left}" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#,
        top = margins.top,
        right = margins.right,
        bottom = margins.bottom,
        left = margins.left,
    )
}
