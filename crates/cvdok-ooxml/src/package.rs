//! Static package parts
//!
//! The renderer builds the DOCX from a blank slate, so the boilerplate
//! parts every package needs live here: content types, the package-level
//! relationships, a minimal stylesheet and the bullet numbering
//! definition.

use crate::theme::Theme;
use crate::xml::escape_xml;

/// Style ID used by bullet paragraphs
pub const LIST_PARAGRAPH_STYLE: &str = "ListParagraph";

/// Package-level relationships (`_rels/.rels`)
pub const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

/// `[Content_Types].xml` for the generated package
///
/// The PNG default is only declared when a logo is embedded.
pub fn content_types_xml(with_png: bool) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
"#,
    );
    if with_png {
        xml.push_str("  <Default Extension=\"png\" ContentType=\"image/png\"/>\n");
    }
    xml.push_str(
        r#"  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
  <Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
</Types>"#,
    );
    xml
}

/// Minimal stylesheet: document defaults plus the bullet paragraph style
pub fn styles_xml(theme: &Theme) -> String {
    let font = escape_xml(&theme.heading_font);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        <w:rFonts w:ascii="{font}" w:hAnsi="{font}"/>
        <w:sz w:val="22"/>
        <w:szCs w:val="22"/>
      </w:rPr>
    </w:rPrDefault>
    <w:pPrDefault>
      <w:pPr>
        <w:spacing w:after="0" w:line="240" w:lineRule="auto"/>
      </w:pPr>
    </w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:styleId="Normal" w:default="1">
    <w:name w:val="Normal"/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="{list_style}">
    <w:name w:val="List Paragraph"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr>
      <w:contextualSpacing/>
    </w:pPr>
  </w:style>
</w:styles>"#,
        font = font,
        list_style = LIST_PARAGRAPH_STYLE,
    )
}

/// One bullet numbering definition (`numId` 1)
pub fn numbering_xml() -> String {
    String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:multiLevelType w:val="singleLevel"/>
    <w:lvl w:ilvl="0">
      <w:start w:val="1"/>
      <w:numFmt w:val="bullet"/>
      <w:lvlText w:val="&#61623;"/>
      <w:lvlJc w:val="left"/>
      <w:rPr>
        <w:rFonts w:ascii="Symbol" w:hAnsi="Symbol" w:hint="default"/>
      </w:rPr>
    </w:lvl>
  </w:abstractNum>
  <w:num w:numId="1">
    <w:abstractNumId w:val="0"/>
  </w:num>
</w:numbering>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_without_png() {
        let xml = content_types_xml(false);
        assert!(xml.contains("/word/document.xml"));
        assert!(xml.contains("/word/styles.xml"));
        assert!(xml.contains("/word/numbering.xml"));
        assert!(!xml.contains("image/png"));
    }

    #[test]
    fn test_content_types_with_png() {
        let xml = content_types_xml(true);
        assert!(xml.contains(r#"Extension="png""#));
        assert!(xml.contains("image/png"));
    }

    #[test]
    fn test_styles_use_theme_font() {
        let theme = Theme::default();
        let xml = styles_xml(&theme);
        assert!(xml.contains(r#"w:ascii="Aptos""#));
        assert!(xml.contains(LIST_PARAGRAPH_STYLE));
    }

    #[test]
    fn test_numbering_defines_bullet_list() {
        let xml = numbering_xml();
        assert!(xml.contains(r#"<w:numFmt w:val="bullet"/>"#));
        assert!(xml.contains(r#"<w:num w:numId="1">"#));
    }
}
